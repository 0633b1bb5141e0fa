//! Guards specific to contract governance

use docflow_types::{Command, Guard};

use crate::document::ContractDocument;
use crate::workflow::VERIFIER_PARAM;

/// Admits verification only by someone other than the author.
///
/// The verifying actor is read from the command's `verifier` parameter.
/// A command without one is rejected.
pub struct VerifierIsNotAuthor;

impl Guard<ContractDocument> for VerifierIsNotAuthor {
    fn evaluate(&self, _state: &str, document: &ContractDocument, command: &Command) -> bool {
        match command.param_str(VERIFIER_PARAM) {
            Some(verifier) => verifier != document.author.as_str(),
            None => false,
        }
    }

    fn name(&self) -> &str {
        "verifier-is-not-author"
    }
}
