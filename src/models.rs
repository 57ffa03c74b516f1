use serde::Serialize;

/// Output tables produced by the export, in the order their files are opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Custodian,
    Property,
    Parcel,
    Structure,
    StructurePhoto,
    Tenant,
    FederalContaminatedSite,
    PropertyPhoto,
}

impl Table {
    pub const COUNT: usize = 8;

    pub const ALL: [Table; Table::COUNT] = [
        Table::Custodian,
        Table::Property,
        Table::Parcel,
        Table::Structure,
        Table::StructurePhoto,
        Table::Tenant,
        Table::FederalContaminatedSite,
        Table::PropertyPhoto,
    ];

    /// Returns a human-readable name for the table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Custodian => "Custodian",
            Self::Property => "Property",
            Self::Parcel => "Parcel",
            Self::Structure => "Structure",
            Self::StructurePhoto => "Structure Photo",
            Self::Tenant => "Tenant",
            Self::FederalContaminatedSite => "Federal Contaminated Site",
            Self::PropertyPhoto => "Property Photo",
        }
    }

    /// Returns the CSV file name written inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Custodian => "custodian.csv",
            Self::Property => "property.csv",
            Self::Parcel => "parcel.csv",
            Self::Structure => "structure.csv",
            Self::StructurePhoto => "structure_photo.csv",
            Self::Tenant => "tenant.csv",
            Self::FederalContaminatedSite => "federal_contaminated_site.csv",
            Self::PropertyPhoto => "property_photo.csv",
        }
    }

    /// Returns the fixed header row. Downstream import tooling depends on this order.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Custodian => &[
                "code",
                "isDepartment",
                "isAgency",
                "isCrownCorporation",
                "portfolioLastCertifiedDate",
                "Name",
                "Official_Contact_Name",
                "Official_Contact_Telephone",
                "Official_Contact_Email",
                "Official_Contact_WebForm",
            ],
            Self::Property => &[
                "lastModifiedDate",
                "createdDate",
                "Property_Number",
                "Custodian_code",
                "Property_Name",
                "Address",
                "Primary_Use",
                "Interest_Type",
                "Restriction_on_Interest",
                "MiniMap",
            ],
            Self::Parcel => &[
                "Property_Number",
                "Parcel_number",
                "Land_Area",
                "Land_Area_unitofMeasure",
                "Building_Count",
                "Floor_Area",
                "Floor_Area_unitofMeasure",
                "ExteriorParkingSpaces",
                "InteriorParkingSpaces",
                "InteriorParkingSpaces_includedInFloorArea",
                "Location_type",
                "Location_sgc",
                "Location_fed",
                "Location_inUrbanArea",
                "Location_inRuralArea",
                "Location_inIsolatedArea",
                "Location_Province",
                "Location_Metro_Area_Name",
                "Location_Municipality",
                "Location_Place_Name",
                "Location_Federal_Electoral_District",
                "Location_Latitude",
                "Location_Longitude",
                "Location_PositionalAccuracy",
                "Location_PositionalAccuracy_unitofMeasure",
                "Location_Country_Name",
                "Location_City_Name",
            ],
            Self::Structure => &[
                "Property_Number",
                "Parcel_number",
                "Structure_Number",
                "occupancy",
                "createdDate",
                "lastModifiedDate",
                "Custodian_code",
                "Structure_Name",
                "Address",
                "Latitude",
                "Longitude",
                "Interest_Type",
                "Condition",
                "Floor_Area",
                "Floor_Area_unitofMeasure",
                "MiniMap",
                "UseTypes",
            ],
            Self::StructurePhoto => &[
                "Property_Number",
                "Parcel_number",
                "Structure_Number",
                "Photo",
            ],
            Self::Tenant => &[
                "Property_Number",
                "Parcel_number",
                "Structure_Number",
                "code",
                "Name",
                "Floor_Area",
                "Floor_Area_unitofMeasure",
            ],
            Self::FederalContaminatedSite => &["Property_Number", "FederalSiteID"],
            Self::PropertyPhoto => &["Property_Number", "Photo"],
        }
    }
}

/// A row type bound to the table it is written to.
pub trait TableRow: Serialize {
    const TABLE: Table;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustodianRow {
    pub code: String,
    #[serde(rename = "isDepartment")]
    pub is_department: String,
    #[serde(rename = "isAgency")]
    pub is_agency: String,
    #[serde(rename = "isCrownCorporation")]
    pub is_crown_corporation: String,
    #[serde(rename = "portfolioLastCertifiedDate")]
    pub portfolio_last_certified_date: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Official_Contact_Name")]
    pub contact_name: String,
    #[serde(rename = "Official_Contact_Telephone")]
    pub contact_telephone: String,
    #[serde(rename = "Official_Contact_Email")]
    pub contact_email: String,
    #[serde(rename = "Official_Contact_WebForm")]
    pub contact_webform: String,
}

impl TableRow for CustodianRow {
    const TABLE: Table = Table::Custodian;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyRow {
    #[serde(rename = "lastModifiedDate")]
    pub last_modified_date: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Custodian_code")]
    pub custodian_code: String,
    #[serde(rename = "Property_Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Primary_Use")]
    pub primary_use: String,
    #[serde(rename = "Interest_Type")]
    pub interest_type: String,
    #[serde(rename = "Restriction_on_Interest")]
    pub restriction_on_interest: String,
    #[serde(rename = "MiniMap")]
    pub mini_map: String,
}

impl TableRow for PropertyRow {
    const TABLE: Table = Table::Property;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParcelRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Parcel_number")]
    pub parcel_number: String,
    #[serde(rename = "Land_Area")]
    pub land_area: String,
    #[serde(rename = "Land_Area_unitofMeasure")]
    pub land_area_unit: String,
    #[serde(rename = "Building_Count")]
    pub building_count: String,
    #[serde(rename = "Floor_Area")]
    pub floor_area: String,
    #[serde(rename = "Floor_Area_unitofMeasure")]
    pub floor_area_unit: String,
    #[serde(rename = "ExteriorParkingSpaces")]
    pub exterior_parking_spaces: String,
    #[serde(rename = "InteriorParkingSpaces")]
    pub interior_parking_spaces: String,
    #[serde(rename = "InteriorParkingSpaces_includedInFloorArea")]
    pub interior_parking_in_floor_area: String,
    #[serde(rename = "Location_type")]
    pub location_type: String,
    #[serde(rename = "Location_sgc")]
    pub location_sgc: String,
    #[serde(rename = "Location_fed")]
    pub location_fed: String,
    #[serde(rename = "Location_inUrbanArea")]
    pub in_urban_area: String,
    #[serde(rename = "Location_inRuralArea")]
    pub in_rural_area: String,
    #[serde(rename = "Location_inIsolatedArea")]
    pub in_isolated_area: String,
    #[serde(rename = "Location_Province")]
    pub province: String,
    #[serde(rename = "Location_Metro_Area_Name")]
    pub metro_area_name: String,
    #[serde(rename = "Location_Municipality")]
    pub municipality: String,
    #[serde(rename = "Location_Place_Name")]
    pub place_name: String,
    #[serde(rename = "Location_Federal_Electoral_District")]
    pub federal_electoral_district: String,
    #[serde(rename = "Location_Latitude")]
    pub latitude: String,
    #[serde(rename = "Location_Longitude")]
    pub longitude: String,
    #[serde(rename = "Location_PositionalAccuracy")]
    pub positional_accuracy: String,
    #[serde(rename = "Location_PositionalAccuracy_unitofMeasure")]
    pub positional_accuracy_unit: String,
    #[serde(rename = "Location_Country_Name")]
    pub country_name: String,
    #[serde(rename = "Location_City_Name")]
    pub city_name: String,
}

impl TableRow for ParcelRow {
    const TABLE: Table = Table::Parcel;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Parcel_number")]
    pub parcel_number: String,
    #[serde(rename = "Structure_Number")]
    pub structure_number: String,
    pub occupancy: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "lastModifiedDate")]
    pub last_modified_date: String,
    #[serde(rename = "Custodian_code")]
    pub custodian_code: String,
    #[serde(rename = "Structure_Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
    #[serde(rename = "Interest_Type")]
    pub interest_type: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Floor_Area")]
    pub floor_area: String,
    #[serde(rename = "Floor_Area_unitofMeasure")]
    pub floor_area_unit: String,
    #[serde(rename = "MiniMap")]
    pub mini_map: String,
    #[serde(rename = "UseTypes")]
    pub use_types: String,
}

impl TableRow for StructureRow {
    const TABLE: Table = Table::Structure;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructurePhotoRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Parcel_number")]
    pub parcel_number: String,
    #[serde(rename = "Structure_Number")]
    pub structure_number: String,
    #[serde(rename = "Photo")]
    pub photo: String,
}

impl TableRow for StructurePhotoRow {
    const TABLE: Table = Table::StructurePhoto;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TenantRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Parcel_number")]
    pub parcel_number: String,
    #[serde(rename = "Structure_Number")]
    pub structure_number: String,
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Floor_Area")]
    pub floor_area: String,
    #[serde(rename = "Floor_Area_unitofMeasure")]
    pub floor_area_unit: String,
}

impl TableRow for TenantRow {
    const TABLE: Table = Table::Tenant;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FederalContaminatedSiteRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "FederalSiteID")]
    pub federal_site_id: String,
}

impl TableRow for FederalContaminatedSiteRow {
    const TABLE: Table = Table::FederalContaminatedSite;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyPhotoRow {
    #[serde(rename = "Property_Number")]
    pub property_number: String,
    #[serde(rename = "Photo")]
    pub photo: String,
}

impl TableRow for PropertyPhotoRow {
    const TABLE: Table = Table::PropertyPhoto;
}
