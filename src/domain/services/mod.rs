//! Domain Services
//!
//! Pure resolution logic over domain entities. Nothing here touches the file
//! system; documents arrive already decoded and bases already resolved.

mod declaration_locator;
mod entry_decoder;
mod entry_merger;
mod fields;
mod set_resolver;
mod suggest;

pub use declaration_locator::DeclarationLocator;
pub use entry_decoder::decode_entry;
pub use entry_merger::{apply_overwrite, MergeError};
pub use fields::FieldError;
pub use set_resolver::{parse_declaration, resolve_declaration, Declaration, ResolveError};
pub use suggest::closest_match;
