use super::context::ExportContext;
use crate::constants::{PROPERTY_ELEMENT, UNIT_OF_MEASURE_ATTR, USE_TYPE_SEPARATOR};
use crate::errors::AppResult;
use crate::models::{
    FederalContaminatedSiteRow, ParcelRow, PropertyPhotoRow, PropertyRow, StructurePhotoRow,
    StructureRow, TenantRow,
};
use crate::parser::Element;
use std::io::Write;

/// Key path of the ancestors of the rows being written.
struct Keys<'a> {
    property: &'a str,
    parcel: &'a str,
    structure: &'a str,
}

/// Walks every `<Property>` under `root` in document order, writing rows as it goes.
pub fn export_document<W: Write>(root: &Element, ctx: &mut ExportContext<W>) -> AppResult<()> {
    for property in root.children_named(PROPERTY_ELEMENT) {
        export_property(property, ctx)?;
        ctx.tick();
    }
    Ok(())
}

fn export_property<W: Write>(property: &Element, ctx: &mut ExportContext<W>) -> AppResult<()> {
    let custodian_code = ctx.register_custodian(property)?;
    let property_number = property.required_text("Property_Number")?;

    ctx.emit(&PropertyRow {
        last_modified_date: property.optional_attr("lastModifiedDate"),
        created_date: property.optional_attr("createdDate"),
        property_number: property_number.clone(),
        custodian_code,
        name: property.optional_text(&["Property_Name_E"]),
        address: property.optional_text(&["Address_E"]),
        primary_use: property.required_text("Primary_Use_E")?,
        interest_type: property.required_text("Interest_Type_E")?,
        restriction_on_interest: property.required_text("Restriction_on_Interest_E")?,
        mini_map: property.optional_text(&["MiniMap"]),
    })?;

    if let Some(parcels) = property.child("Parcels") {
        for parcel in parcels.children_named("Parcel") {
            export_parcel(&property_number, parcel, ctx)?;
        }
    }

    if let Some(sites) = property.child("FederalContaminatedSites") {
        for site in sites.children_named("Site") {
            ctx.emit(&FederalContaminatedSiteRow {
                property_number: property_number.clone(),
                federal_site_id: site.optional_attr("FederalSiteIdentifier"),
            })?;
        }
    }

    if let Some(photos) = property.child("Photos") {
        for photo in photos.children() {
            ctx.emit(&PropertyPhotoRow {
                property_number: property_number.clone(),
                photo: photo.optional_text(&[]),
            })?;
        }
    }

    Ok(())
}

fn export_parcel<W: Write>(
    property_number: &str,
    parcel: &Element,
    ctx: &mut ExportContext<W>,
) -> AppResult<()> {
    let parcel_number = parcel.required_attr("number")?.to_string();
    let land_area = parcel.required_child("Land_Area")?;
    let floor_area = parcel.required_child("Floor_Area")?;
    let location = parcel.required_child("Location")?;

    let interior_parking = parcel.optional_text(&["ParkingSpaces", "Interior"]);
    let interior_in_floor_area = if interior_parking.is_empty() {
        String::new()
    } else {
        parcel
            .lookup(&["ParkingSpaces", "Interior"])
            .map(|interior| interior.optional_attr("includedInFloorArea"))
            .unwrap_or_default()
    };

    let positional_accuracy_unit = location
        .child("Positional_Accuracy")
        .map(|accuracy| accuracy.optional_attr(UNIT_OF_MEASURE_ATTR))
        .unwrap_or_default();

    ctx.emit(&ParcelRow {
        property_number: property_number.to_string(),
        parcel_number: parcel_number.clone(),
        land_area: land_area.optional_text(&[]),
        land_area_unit: land_area.optional_attr(UNIT_OF_MEASURE_ATTR),
        building_count: parcel.required_text("Building_Count")?,
        floor_area: floor_area.optional_text(&[]),
        // Published tables carry the land-area unit in this column
        floor_area_unit: land_area.optional_attr(UNIT_OF_MEASURE_ATTR),
        exterior_parking_spaces: parcel.optional_text(&["ParkingSpaces", "Exterior"]),
        interior_parking_spaces: interior_parking,
        interior_parking_in_floor_area: interior_in_floor_area,
        location_type: location.optional_attr("type"),
        location_sgc: location.optional_attr("sgc"),
        location_fed: location.optional_attr("fed"),
        in_urban_area: location.optional_attr("inUrbanArea"),
        in_rural_area: location.optional_attr("inRuralArea"),
        in_isolated_area: location.optional_attr("inIsolatedArea"),
        province: location.optional_text(&["Province_E"]),
        metro_area_name: location.optional_text(&["Metro_Area_Name_E"]),
        municipality: location.optional_text(&["Municipality_E"]),
        place_name: location.optional_text(&["Place_Name"]),
        federal_electoral_district: location.optional_text(&["Federal_Electoral_District_E"]),
        latitude: location.optional_text(&["Latitude"]),
        longitude: location.optional_text(&["Longitude"]),
        positional_accuracy: location.optional_text(&["Positional_Accuracy"]),
        positional_accuracy_unit,
        country_name: location.optional_text(&["Country_Name_E"]),
        city_name: location.optional_text(&["City_Name_E"]),
    })?;

    if let Some(structures) = parcel.child("Structures") {
        for structure in structures.children_named("Structure") {
            export_structure(property_number, &parcel_number, structure, ctx)?;
        }
    }

    Ok(())
}

/// Joins the display names of every use type under `<UseTypes>`.
fn use_type_names(use_types: &Element) -> AppResult<String> {
    let names = use_types
        .children()
        .map(|use_type| use_type.required_text("Use_Name_E"))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(names.join(USE_TYPE_SEPARATOR))
}

fn export_structure<W: Write>(
    property_number: &str,
    parcel_number: &str,
    structure: &Element,
    ctx: &mut ExportContext<W>,
) -> AppResult<()> {
    let custodian_code = ctx.register_custodian(structure)?;
    let structure_number = structure.required_text("Structure_Number")?;
    let floor_area = structure.required_child("Floor_Area")?;
    let use_types = use_type_names(structure.required_child("UseTypes")?)?;

    ctx.emit(&StructureRow {
        property_number: property_number.to_string(),
        parcel_number: parcel_number.to_string(),
        structure_number: structure_number.clone(),
        occupancy: structure.optional_attr("occupancy"),
        created_date: structure.optional_attr("createdDate"),
        last_modified_date: structure.optional_attr("lastModifiedDate"),
        custodian_code,
        name: structure.required_text("Structure_Name_E")?,
        address: structure.optional_text(&["Address_E"]),
        latitude: structure.optional_text(&["Location", "Latitude"]),
        longitude: structure.optional_text(&["Location", "Longitude"]),
        interest_type: structure.required_text("Interest_Type_E")?,
        condition: structure.optional_text(&["Condition_E"]),
        floor_area: floor_area.optional_text(&[]),
        floor_area_unit: floor_area.optional_attr(UNIT_OF_MEASURE_ATTR),
        mini_map: structure.optional_text(&["MiniMap"]),
        use_types,
    })?;

    let keys = Keys {
        property: property_number,
        parcel: parcel_number,
        structure: &structure_number,
    };

    if let Some(tenants) = structure.child("Tenants") {
        for tenant in tenants.children() {
            export_tenant(&keys, tenant, ctx)?;
        }
    }

    if let Some(photos) = structure.child("Photos") {
        for photo in photos.children() {
            ctx.emit(&StructurePhotoRow {
                property_number: keys.property.to_string(),
                parcel_number: keys.parcel.to_string(),
                structure_number: keys.structure.to_string(),
                photo: photo.optional_text(&[]),
            })?;
        }
    }

    Ok(())
}

fn export_tenant<W: Write>(
    keys: &Keys<'_>,
    tenant: &Element,
    ctx: &mut ExportContext<W>,
) -> AppResult<()> {
    let floor_area = tenant.required_child("Floor_Area")?;
    ctx.emit(&TenantRow {
        property_number: keys.property.to_string(),
        parcel_number: keys.parcel.to_string(),
        structure_number: keys.structure.to_string(),
        code: tenant.optional_attr("code"),
        name: tenant.required_text("Name_E")?,
        floor_area: floor_area.optional_text(&[]),
        floor_area_unit: floor_area.optional_attr(UNIT_OF_MEASURE_ATTR),
    })
}
