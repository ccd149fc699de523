//! Header and source rendering.
//!
//! Layout is fixed: a guard macro named `CODIFY_MY_RESOURCE_<PACK>`
//! (pack name uppercased), one `extern` declaration plus a `_size`
//! constant per resource in the header, and one hex-literal array
//! definition per resource in the source. The formatter is local to a
//! single call; there is no shared rendering state.

use std::fmt::Write as _;

use crate::errors::CodifyError;
use crate::pack::Pack;

const GUARD_PREFIX: &str = "CODIFY_MY_RESOURCE_";

/// Renders `(header_text, source_text)` for a pack.
///
/// Pure string construction; callers own all file I/O. Resource order
/// in both outputs matches the order in `pack.resources`.
///
/// # Errors
///
/// `Template` if the underlying formatter fails (should not occur for
/// well-formed inputs).
pub fn generate(pack: &Pack) -> Result<(String, String), CodifyError> {
    Ok((render_header(pack)?, render_source(pack)?))
}

fn render_header(pack: &Pack) -> Result<String, CodifyError> {
    let guard = format!("{GUARD_PREFIX}{}", pack.pack_name.to_uppercase());

    let mut out = String::new();
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "#include <cstdlib>")?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    for resource in &pack.resources {
        writeln!(out, "extern uint8_t {}[];", resource.name)?;
        writeln!(out, "const size_t {}_size={};", resource.name, resource.bytes.len())?;
    }
    writeln!(out)?;
    writeln!(out, "#endif")?;
    writeln!(out)?;
    Ok(out)
}

fn render_source(pack: &Pack) -> Result<String, CodifyError> {
    let mut out = String::new();
    if pack.include_prefix.is_empty() {
        writeln!(out, "#include \"{}.h\"", pack.pack_name)?;
    } else {
        writeln!(out, "#include \"{}/{}.h\"", pack.include_prefix, pack.pack_name)?;
    }
    writeln!(out)?;
    for resource in &pack.resources {
        write!(out, "uint8_t {}[] = {{ ", resource.name)?;
        for byte in &resource.bytes {
            write!(out, "0x{byte:02x}, ")?;
        }
        writeln!(out, "}};")?;
    }
    writeln!(out)?;
    Ok(out)
}
