//! Catalogue of the record kinds managed by the application.
//!
//! Each resource has a list route (the page hosting its data table) and a
//! default column configuration. Role menus are assembled from this
//! catalogue, so a route only has to be spelled once.

use crate::table::Column;

/// A kind of record listed in a data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Buildings,
    Floors,
    Rooms,
    Tenants,
    Accounts,
    Contracts,
    MeterReadings,
    Invoices,
    Payments,
    Feedback,
    MyContracts,
    MyInvoices,
    MyPayments,
}

impl Resource {
    /// Every resource, in menu order.
    pub const ALL: [Resource; 13] = [
        Resource::Buildings,
        Resource::Floors,
        Resource::Rooms,
        Resource::Tenants,
        Resource::Accounts,
        Resource::Contracts,
        Resource::MeterReadings,
        Resource::Invoices,
        Resource::Payments,
        Resource::Feedback,
        Resource::MyContracts,
        Resource::MyInvoices,
        Resource::MyPayments,
    ];

    /// Display title used in menus and breadcrumbs.
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Buildings => "Buildings",
            Resource::Floors => "Floors",
            Resource::Rooms => "Rooms",
            Resource::Tenants => "Tenants",
            Resource::Accounts => "Accounts",
            Resource::Contracts => "Contracts",
            Resource::MeterReadings => "Meter readings",
            Resource::Invoices => "Invoices",
            Resource::Payments => "Payments",
            Resource::Feedback => "Feedback",
            Resource::MyContracts => "My contracts",
            Resource::MyInvoices => "My invoices",
            Resource::MyPayments => "My payments",
        }
    }

    /// Sidebar section the resource belongs to, without the leading slash.
    ///
    /// `None` for resources that live at the top level.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Resource::Buildings | Resource::Floors | Resource::Rooms => Some("data-categories"),
            Resource::Tenants | Resource::Accounts => Some("people"),
            Resource::Contracts
            | Resource::MeterReadings
            | Resource::Invoices
            | Resource::Payments => Some("finance"),
            Resource::MyContracts | Resource::MyInvoices | Resource::MyPayments => Some("my"),
            Resource::Feedback => None,
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Resource::Buildings => "buildings",
            Resource::Floors => "floors",
            Resource::Rooms => "rooms",
            Resource::Tenants => "tenants",
            Resource::Accounts => "accounts",
            Resource::Contracts | Resource::MyContracts => "contracts",
            Resource::MeterReadings => "meter-readings",
            Resource::Invoices | Resource::MyInvoices => "invoices",
            Resource::Payments | Resource::MyPayments => "payments",
            Resource::Feedback => "feedback",
        }
    }

    /// Absolute route of the resource's list page.
    pub fn path(&self) -> String {
        match self.section() {
            Some(section) => format!("/{}/{}", section, self.slug()),
            None => format!("/{}", self.slug()),
        }
    }

    /// Default column configuration for the resource's table.
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Resource::Buildings => vec![
                Column::new("name", "Name").sortable(),
                Column::new("address", "Address").sortable(),
                Column::new("numberOfFloors", "Floors").sortable(),
                Column::new("status", "Status"),
            ],
            Resource::Floors => vec![
                Column::new("name", "Name").sortable(),
                Column::new("buildingName", "Building").sortable(),
                Column::new("numberOfRooms", "Rooms"),
            ],
            Resource::Rooms => vec![
                Column::new("roomNumber", "Room").sortable(),
                Column::new("floorName", "Floor"),
                Column::new("area", "Area").sortable(),
                Column::new("price", "Price").sortable(),
                Column::new("status", "Status"),
            ],
            Resource::Tenants => vec![
                Column::new("fullName", "Full name").sortable(),
                Column::new("phoneNumber", "Phone"),
                Column::new("email", "Email").sortable(),
                Column::new("identityNumber", "Identity number"),
            ],
            Resource::Accounts => vec![
                Column::new("username", "Username").sortable(),
                Column::new("email", "Email").sortable(),
                Column::new("role", "Role"),
                Column::new("active", "Active"),
            ],
            Resource::Contracts | Resource::MyContracts => vec![
                Column::new("contractCode", "Code").sortable(),
                Column::new("roomNumber", "Room"),
                Column::new("startDate", "Start").sortable(),
                Column::new("endDate", "End").sortable(),
                Column::new("deposit", "Deposit"),
                Column::new("status", "Status"),
            ],
            Resource::MeterReadings => vec![
                Column::new("roomNumber", "Room").sortable(),
                Column::new("meterType", "Meter"),
                Column::new("previousIndex", "Previous"),
                Column::new("currentIndex", "Current"),
                Column::new("readingDate", "Read on").sortable(),
            ],
            Resource::Invoices | Resource::MyInvoices => vec![
                Column::new("invoiceCode", "Code").sortable(),
                Column::new("month", "Month").sortable(),
                Column::new("totalAmount", "Total").sortable(),
                Column::new("status", "Status"),
            ],
            Resource::Payments | Resource::MyPayments => vec![
                Column::new("invoiceCode", "Invoice"),
                Column::new("amount", "Amount").sortable(),
                Column::new("method", "Method"),
                Column::new("paidAt", "Paid at").sortable(),
            ],
            Resource::Feedback => vec![
                Column::new("title", "Title").sortable(),
                Column::new("tenantName", "Tenant"),
                Column::new("createdAt", "Created").sortable(),
                Column::new("status", "Status"),
            ],
        }
    }

    /// Looks up the resource whose list page is `path` or an ancestor of it.
    pub fn for_path(path: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|resource| {
            let route = resource.path();
            path == route || path.starts_with(&format!("{}/", route))
        })
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Buildings.path(), "/data-categories/buildings");
        assert_eq!(Resource::MeterReadings.path(), "/finance/meter-readings");
        assert_eq!(Resource::Feedback.path(), "/feedback");
        assert_eq!(Resource::MyInvoices.path(), "/my/invoices");
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Resource::ALL.iter().map(Resource::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Resource::ALL.len());
    }

    #[test]
    fn test_for_path_matches_detail_pages() {
        assert_eq!(
            Resource::for_path("/data-categories/rooms/42"),
            Some(Resource::Rooms)
        );
        assert_eq!(Resource::for_path("/finance/invoices"), Some(Resource::Invoices));
        assert_eq!(Resource::for_path("/finance/invoicesx"), None);
        assert_eq!(Resource::for_path("/unknown"), None);
    }

    #[test]
    fn test_every_resource_has_a_sortable_column() {
        for resource in Resource::ALL {
            assert!(
                resource.columns().iter().any(|c| c.is_sort),
                "{} has no sortable column",
                resource
            );
        }
    }
}
