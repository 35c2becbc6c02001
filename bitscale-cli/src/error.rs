// ============================================================================
// bitscale-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias shared by the commands
//
// Commands return core errors unchanged; `main` reports them and sets the
// exit code.

use bitscale_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
