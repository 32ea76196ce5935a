//! HandlerActivator - instantiates the first usable handler candidate

use crate::application::ports::component_port::ComponentFactory;
use crate::domain::entities::HandlerCandidate;
use crate::domain::errors::PreviewError;
use crate::domain::value_objects::HResult;

use super::active_handler::ActiveHandler;

/// Tries candidates in discovery order until one negotiates both
/// capabilities
pub struct HandlerActivator<'f, F: ComponentFactory> {
    factory: &'f F,
}

impl<'f, F: ComponentFactory> HandlerActivator<'f, F> {
    pub fn new(factory: &'f F) -> Self {
        Self { factory }
    }

    /// Return the first candidate whose instance supports file
    /// initialisation and previewing.
    ///
    /// Each rejected instance is released before the next candidate is
    /// tried. The error carries the last instantiation failure code, which
    /// is informational only.
    pub fn activate(
        &self,
        candidates: &[HandlerCandidate],
    ) -> Result<ActiveHandler<F::Component>, PreviewError> {
        let mut last_code: Option<HResult> = None;

        for candidate in candidates {
            let instance = match self.factory.instantiate(&candidate.class_id) {
                Ok(instance) => instance,
                Err(code) => {
                    crate::log!(
                        "CoCreateInstance({}) failed: {}",
                        candidate.class_id,
                        code
                    );
                    last_code = Some(code);
                    continue;
                }
            };

            let negotiated = self.factory.negotiate(&instance);
            drop(instance);

            match negotiated {
                Some(component) => {
                    crate::log!(
                        "activated {} from {} (preferred: {})",
                        candidate.class_id,
                        candidate.subkey,
                        candidate.preferred
                    );
                    return Ok(ActiveHandler::new(component, candidate.class_id));
                }
                None => {
                    crate::log!(
                        "{} lacks preview handler capabilities, released",
                        candidate.class_id
                    );
                }
            }
        }

        Err(PreviewError::ActivationFailed {
            tried: candidates.len(),
            last_code,
        })
    }
}
