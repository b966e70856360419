//! Built-in patches compiled into the binary.

use crate::core::patch::Patch;
use crate::error::{PatchError, Result};

/// Name of the patch applied when none is given.
pub const DEFAULT_PATCH: &str = "useeffect-order-notifications";

/// A patch definition known at compile time.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPatch {
    /// Patch name.
    pub name: &'static str,
    /// One-line description shown by `blockfix list`.
    pub description: &'static str,
    /// File the patch is meant for, relative to the working directory.
    pub default_target: &'static str,
    /// Search pattern.
    pub pattern: &'static str,
    /// Literal replacement block.
    pub replacement: &'static str,
}

impl BuiltinPatch {
    /// Compiles the definition into a [`Patch`].
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn compile(&self) -> Result<Patch> {
        Patch::new(self.name, self.pattern, self.replacement)
    }
}

// Matches the orders subscription hook up to the one keyed on
// `[view, adminTab]`. Both spans are lazy so the match stops at the
// first closing dependency list after the unsubscribe.
const USEEFFECT_ORDER_NOTIFICATIONS: BuiltinPatch = BuiltinPatch {
    name: DEFAULT_PATCH,
    description: "Rewrite the orders subscription hook to notify on new active orders",
    default_target: "App.tsx",
    pattern: r"(  useEffect\(\(\) => \{[\s\S]*?return \(\) => unsubscribe\(\);[\s\S]*?\}, \[view, adminTab\]\);)",
    replacement: include_str!("patches/useeffect_order_notifications.tsx"),
};

static BUILTINS: &[BuiltinPatch] = &[USEEFFECT_ORDER_NOTIFICATIONS];

/// Returns every built-in patch.
#[must_use]
pub fn all() -> &'static [BuiltinPatch] {
    BUILTINS
}

/// Looks up a built-in patch by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static BuiltinPatch> {
    BUILTINS.iter().find(|p| p.name == name)
}

/// Looks up and compiles a built-in patch.
///
/// # Errors
///
/// Returns [`PatchError::UnknownPatch`] if no patch has this name.
pub fn compile(name: &str) -> Result<Patch> {
    find(name)
        .ok_or_else(|| PatchError::UnknownPatch {
            name: name.to_string(),
        })?
        .compile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_compile() {
        for builtin in all() {
            assert!(builtin.compile().is_ok(), "{} failed", builtin.name);
        }
    }

    #[test]
    fn test_default_is_registered() {
        let patch = find(DEFAULT_PATCH).unwrap();
        assert_eq!(patch.default_target, "App.tsx");
    }

    #[test]
    fn test_unknown_patch() {
        let err = compile("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("unknown patch: does-not-exist"));
    }

    #[test]
    fn test_replacement_is_verbatim_block() {
        let patch = compile(DEFAULT_PATCH).unwrap();
        let replacement = patch.replacement();
        assert!(replacement.starts_with("  useEffect(() => {\n"));
        assert!(replacement.ends_with("  }, [view, adminTab]);"));
        assert!(replacement.contains("body: `Có ${newOrders.length} đơn hàng mới cần pha chế`"));
    }

    #[test]
    fn test_replacement_rematches_own_pattern() {
        let patch = compile(DEFAULT_PATCH).unwrap();
        assert_eq!(patch.count_matches(patch.replacement()), 1);
    }
}
