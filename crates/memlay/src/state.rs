//! The live-target capability consumed by bound resolution.

use crate::platform::PlatformContext;

/// Handle onto a live target process.
///
/// The embedding runtime implements this; the core only needs the platform
/// context the target is running under. Raw read/write primitives live with
/// the accessor layer, outside this crate.
pub trait TargetState {
    fn context(&self) -> PlatformContext;
}

/// A bare context is its own (offline) target state.
impl TargetState for PlatformContext {
    fn context(&self) -> PlatformContext {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Bits, Platform};

    struct FakeProcess {
        context: PlatformContext,
    }

    impl TargetState for FakeProcess {
        fn context(&self) -> PlatformContext {
            self.context
        }
    }

    #[test]
    fn test_context_is_its_own_state() {
        let ctx = PlatformContext::new(Bits::Bits32, Platform::Macos);
        assert_eq!(ctx.context(), ctx);
    }

    #[test]
    fn test_custom_state() {
        let process = FakeProcess {
            context: PlatformContext::new(Bits::Bits64, Platform::Windows),
        };
        assert_eq!(process.context().pointer_size(), 8);
    }
}
