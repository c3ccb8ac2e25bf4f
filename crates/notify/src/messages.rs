//! User-facing messages shown on failed cart operations.
//!
//! The storefront ships to a Brazilian audience; these strings are rendered
//! verbatim by the presentation layer, so they stay in Portuguese here.

/// Requested quantity exceeds the available stock.
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora do estoque";

/// Adding a product failed for any other reason.
pub const ADD_FAILED: &str = "Erro na adição do produto";

/// Removing a product failed.
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";

/// Changing a product's quantity failed for any other reason.
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
