pub mod wizard;

pub use wizard::{
    CheckEmailAvailability, RegisterAccount, WizardContext, WizardError, WizardOrchestrator,
};
