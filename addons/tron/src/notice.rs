use std::sync::Once;

const LICENSE_NOTICE: &str = "[Weft Labs Licensing Notice]\n\nThis Weft addon is licensed under the Business Source License 1.1 (BSL 1.1).\nUse by for-profit organizations in production environments requires a commercial license from Weft Labs.\nFor licensing information, visit https://weftlabs.dev/licensing.";

static NOTICE: Once = Once::new();

/// Printed at most once per process lifetime, on first batch execution.
/// Process-wide state with an explicit lifecycle: set on first use, never
/// reset, and kept entirely outside the request-building path.
pub(crate) fn emit_usage_notice() {
    NOTICE.call_once(|| {
        eprintln!("{}", LICENSE_NOTICE);
    });
}
