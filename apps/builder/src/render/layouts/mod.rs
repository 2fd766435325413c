//! One file per layout strategy. Each strategy owns its section ordering,
//! grouping, headings, and fallback text; shared presence rules and
//! derived-text rules live in [`crate::render::helpers`].

pub mod academic_scholar;
pub mod creative_designer;
pub mod creative_portfolio;
pub mod legal_professional;
pub mod minimalist_clean;
pub mod modern_executive;
pub mod professional_accountant;
pub mod sales_executive;
pub mod single_column;
pub mod tech_sidebar;
