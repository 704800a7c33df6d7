/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.
*/

use super::GenericContext;

/// Terminates a solve, if true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback, checked on each iteration of a solve, which interrupts the solve if true is returned.
    ///
    /// An interrupted solve reports [Unknown](crate::reports::Report::Unknown).
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }
}
