use thiserror::Error;

/// Регионы разметки, без которых витрина не запускается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRegion {
    ProductGrid,
    CategoryList,
    PaginationControls,
}

impl RequiredRegion {
    pub const ALL: [RequiredRegion; 3] = [
        RequiredRegion::ProductGrid,
        RequiredRegion::CategoryList,
        RequiredRegion::PaginationControls,
    ];

    /// HTML `id` of the region in the shop page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::ProductGrid => "product-grid",
            Self::CategoryList => "category-list",
            Self::PaginationControls => "pagination-controls",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("required elements not found: {}", missing_ids(.0))]
    MissingRegions(Vec<RequiredRegion>),
}

fn missing_ids(regions: &[RequiredRegion]) -> String {
    regions
        .iter()
        .map(|r| format!("#{}", r.element_id()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every required region at once so the failure is reported a single
/// time with the full list.
pub fn check_regions<F>(is_present: F) -> Result<(), BootstrapError>
where
    F: Fn(&str) -> bool,
{
    let missing: Vec<RequiredRegion> = RequiredRegion::ALL
        .into_iter()
        .filter(|region| !is_present(region.element_id()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BootstrapError::MissingRegions(missing))
    }
}
