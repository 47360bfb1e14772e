use std::sync::Arc;

use crate::attributes::Attributes;
use crate::control::{CallbackRef, EventCallback, EventData};
use crate::error::ChoromapError;

/// What a dispatcher does with callback failures.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The first failing callback aborts the dispatch; callbacks registered after it do not
    /// run, and its error surfaces to the caller.
    #[default]
    Propagate,
    /// Every callback runs; failures are collected into
    /// [`ChoromapError::CallbacksFailed`].
    Isolate,
}

/// Ordered collection of callbacks for one event kind.
///
/// Callbacks are invoked in registration order, synchronously, on the calling thread. The same
/// handle may be registered more than once; each registration is invoked separately.
#[derive(Default)]
pub struct CallbackDispatcher {
    callbacks: Vec<CallbackRef>,
    policy: ErrorPolicy,
}

impl CallbackDispatcher {
    /// Creates an empty dispatcher with the given error policy.
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            callbacks: Vec::new(),
            policy,
        }
    }

    /// Registers a callback, or removes one when `remove` is true.
    ///
    /// Removal drops the first registration pointer-equal to the given handle and is silently a
    /// no-op when there is none.
    pub fn register_callback(&mut self, callback: CallbackRef, remove: bool) {
        if remove {
            if let Some(index) = self
                .callbacks
                .iter()
                .position(|registered| Arc::ptr_eq(registered, &callback))
            {
                self.callbacks.remove(index);
            }
        } else {
            self.callbacks.push(callback);
        }
    }

    /// Invokes every registered callback with the widget's attributes and the event payload.
    pub fn dispatch(
        &self,
        attributes: &mut Attributes,
        payload: &EventData,
    ) -> Result<(), ChoromapError> {
        match self.policy {
            ErrorPolicy::Propagate => {
                for callback in &self.callbacks {
                    callback.call(attributes, payload)?;
                }
                Ok(())
            }
            ErrorPolicy::Isolate => {
                let mut errors = Vec::new();
                for callback in &self.callbacks {
                    if let Err(error) = callback.call(attributes, payload) {
                        errors.push(error);
                    }
                }
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(ChoromapError::CallbacksFailed(errors))
                }
            }
        }
    }

    /// Current error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Changes the error policy for subsequent dispatches.
    pub fn set_policy(&mut self, policy: ErrorPolicy) {
        self.policy = policy;
    }

    /// Number of registered callbacks, counting duplicates.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// True when no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
