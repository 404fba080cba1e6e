//! Column contract: the fields the pipeline reads and the normalized headers
//! accepted for each.

use crate::table::Table;

/// A logical input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Vendor,
    Amount,
    SdoPct,
    Category,
    ContractCode,
    FiscalYear,
    ContactName,
    Role,
    Email,
    Phone,
    SubCategory,
    Type,
}

impl Field {
    pub const ALL: [Self; 12] = [
        Self::Vendor,
        Self::Amount,
        Self::SdoPct,
        Self::Category,
        Self::ContractCode,
        Self::FiscalYear,
        Self::ContactName,
        Self::Role,
        Self::Email,
        Self::Phone,
        Self::SubCategory,
        Self::Type,
    ];

    /// Canonical name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Amount => "amount",
            Self::SdoPct => "sdo_pct",
            Self::Category => "category",
            Self::ContractCode => "contract_code",
            Self::FiscalYear => "fiscal_year",
            Self::ContactName => "contact_name",
            Self::Role => "role",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::SubCategory => "sub_category",
            Self::Type => "type",
        }
    }

    /// Accepted normalized headers, in preference order.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Vendor => &["vendor", "vendor_name", "company", "company_name"],
            Self::Amount => &["amount", "contract_amount", "total_amount", "value"],
            Self::SdoPct => &["sdo_pct", "sdo_commitment_pct", "sdo_commitment", "sdo"],
            Self::Category => &["category", "sector", "procurement_category"],
            Self::ContractCode => &["contract_code", "contract", "code"],
            Self::FiscalYear => &["fiscal_year", "fy", "year"],
            Self::ContactName => &["name", "contact_name", "contact"],
            Self::Role => &["role"],
            Self::Email => &["email"],
            Self::Phone => &["phone"],
            Self::SubCategory => &["sub_category", "industry", "subcategory"],
            Self::Type => &["type", "designation", "company_type"],
        }
    }

    /// Numeric fields are parsed from currency-formatted text during normalization.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Amount | Self::SdoPct | Self::FiscalYear)
    }

    /// The field a normalized column name stands for.
    #[must_use]
    pub fn resolve(column: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.aliases().contains(&column))
    }

    /// Index of this field's column in a normalized table, preferring earlier aliases.
    #[must_use]
    pub fn locate(self, table: &Table) -> Option<usize> {
        self.aliases()
            .iter()
            .find_map(|alias| table.column_index(alias))
    }
}
