use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rust_decimal::Decimal;

use restopos_core::MenuCode;
use restopos_floor::Table;
use restopos_menu::MenuItem;
use restopos_staff::StaffRole;

use crate::row::{Row, read_rows};
use crate::{LoadError, LoadResult};

/// Everything the floor needs before the first order is taken.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub menu_items: Vec<MenuItem>,
    pub staff_roles: Vec<StaffRole>,
    pub tables: Vec<Table>,
}

/// Reads reference data from headed CSV files.
///
/// Expected columns:
/// - menu items: `Code`, `Name`, `Price`, `Category`
/// - staff roles: `Role`, `Discount`, `CanVoid`, `CanComp`
/// - tables: `Number`, `Capacity`
pub struct DataLoader;

impl DataLoader {
    pub const MENU_ITEMS_FILE: &'static str = "menu_items.csv";
    pub const STAFF_ROLES_FILE: &'static str = "staff_roles.csv";
    pub const TABLES_FILE: &'static str = "tables.csv";

    /// Load all three files from `dir`.
    pub fn load_all(dir: impl AsRef<Path>) -> LoadResult<ReferenceData> {
        let dir = dir.as_ref();
        Ok(ReferenceData {
            menu_items: Self::load_menu_items(dir.join(Self::MENU_ITEMS_FILE))?,
            staff_roles: Self::load_staff_roles(dir.join(Self::STAFF_ROLES_FILE))?,
            tables: Self::load_tables(dir.join(Self::TABLES_FILE))?,
        })
    }

    pub fn load_menu_items(path: impl AsRef<Path>) -> LoadResult<Vec<MenuItem>> {
        let path = path.as_ref();
        let items = Self::menu_items_from_reader(open(path)?)?;
        tracing::info!(path = %path.display(), count = items.len(), "menu items loaded");
        Ok(items)
    }

    pub fn load_staff_roles(path: impl AsRef<Path>) -> LoadResult<Vec<StaffRole>> {
        let path = path.as_ref();
        let roles = Self::staff_roles_from_reader(open(path)?)?;
        tracing::info!(path = %path.display(), count = roles.len(), "staff roles loaded");
        Ok(roles)
    }

    pub fn load_tables(path: impl AsRef<Path>) -> LoadResult<Vec<Table>> {
        let path = path.as_ref();
        let tables = Self::tables_from_reader(open(path)?)?;
        tracing::info!(path = %path.display(), count = tables.len(), "tables loaded");
        Ok(tables)
    }

    pub fn menu_items_from_reader<R: Read>(reader: R) -> LoadResult<Vec<MenuItem>> {
        read_rows(reader, |row| {
            let code = MenuCode::new(row.text("Code")?).map_err(|e| row.domain(e))?;
            let price = parse_price(row)?;
            MenuItem::new(code, row.text("Name")?, price, row.text("Category")?)
                .map_err(|e| row.domain(e))
        })
    }

    pub fn staff_roles_from_reader<R: Read>(reader: R) -> LoadResult<Vec<StaffRole>> {
        read_rows(reader, |row| {
            StaffRole::new(
                row.text("Role")?,
                row.parse::<i64>("Discount")?,
                row.flag("CanVoid")?,
                row.flag("CanComp")?,
            )
            .map_err(|e| row.domain(e))
        })
    }

    pub fn tables_from_reader<R: Read>(reader: R) -> LoadResult<Vec<Table>> {
        read_rows(reader, |row| {
            Ok(Table::new(
                row.parse::<u32>("Number")?,
                row.parse::<u32>("Capacity")?,
            ))
        })
    }
}

fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Plain decimals first, then scientific notation (`1.2e1`).
fn parse_price(row: &Row<'_>) -> LoadResult<Decimal> {
    let raw = row.text("Price")?;
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| row.invalid("Price", raw, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use restopos_core::DomainError;

    #[test]
    fn staff_role_flags_follow_literal_true() {
        let csv = "Role,Discount,CanVoid,CanComp\n\
                   Manager,50,True,True\n\
                   Server,50,False,False\n\
                   Host,0,true,TRUE\n";
        let roles = DataLoader::staff_roles_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(roles.len(), 3);
        assert_eq!(roles[0].name(), "Manager");
        assert!(roles[0].can_void() && roles[0].can_comp());
        assert_eq!(roles[1].name(), "Server");
        assert!(!roles[1].can_void() && !roles[1].can_comp());
        assert!(!roles[2].can_void() && !roles[2].can_comp());
    }

    #[test]
    fn menu_items_parse_decimal_prices() {
        let csv = "Code,Name,Price,Category\n\
                   APP01,Spring Rolls,6.99,Appetizer\n\
                   DRK02,Soda,2,Drink\n\
                   SPC01,Special,1.25e1,Entree\n";
        let items = DataLoader::menu_items_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].code(), &MenuCode::new("APP01").unwrap());
        assert_eq!(items[0].name(), "Spring Rolls");
        assert_eq!(items[0].price(), Decimal::new(699, 2));
        assert_eq!(items[0].category(), "Appetizer");
        assert!(items[0].is_available());
        assert_eq!(items[1].price(), Decimal::from(2));
        assert_eq!(items[2].price(), Decimal::new(125, 1));
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "Capacity,Number\n4,1\n8,6\n";
        let tables = DataLoader::tables_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(tables[0].number(), 1);
        assert_eq!(tables[0].capacity(), 4);
        assert_eq!(tables[1].number(), 6);
        assert_eq!(tables[1].capacity(), 8);
    }

    #[test]
    fn missing_header_is_reported() {
        let csv = "Code,Name,Price\nAPP01,Spring Rolls,6.99\n";
        let err = DataLoader::menu_items_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { row: 1, column: "Category" }
        ));
    }

    #[test]
    fn short_row_is_reported() {
        let csv = "Number,Capacity\n1,4\n2\n";
        let err = DataLoader::tables_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { row: 2, column: "Capacity" }
        ));
    }

    #[test]
    fn bad_number_is_reported() {
        let csv = "Number,Capacity\none,4\n";
        let err = DataLoader::tables_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidValue { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Number");
                assert_eq!(value, "one");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn negative_price_is_a_domain_error() {
        let csv = "Code,Name,Price,Category\nBAD01,Refund,-1.00,Misc\n";
        let err = DataLoader::menu_items_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Domain { row: 1, source: DomainError::Validation(_) }
        ));
    }

    #[test]
    fn out_of_range_discount_is_a_domain_error() {
        for discount in ["150", "300", "-5"] {
            let csv = format!("Role,Discount,CanVoid,CanComp\nOwner,{discount},True,True\n");
            let err = DataLoader::staff_roles_from_reader(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, LoadError::Domain { row: 1, source: DomainError::Validation(_) }),
                "discount {discount}: {err:?}"
            );
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let tables = DataLoader::tables_from_reader("Number,Capacity\n".as_bytes()).unwrap();
        assert!(tables.is_empty());
    }
}
