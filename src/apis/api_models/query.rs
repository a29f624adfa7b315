use crate::utils::pagination;
use serde::Deserialize;
use utoipa::IntoParams;

/// Page selection for list endpoints. The value is parsed leniently:
/// absent or non-numeric reads as page 1, and out-of-range numbers clamp
/// during slicing. Page size is server configuration, not a parameter.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct PageQuery {
    #[param(default = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_number(&self) -> u32 {
        pagination::page_number(self.page.as_deref())
    }
}
