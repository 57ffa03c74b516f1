//! Common test utilities for integration tests

use dfrp_export::config::ResolvedConfig;
use std::fs;
use std::path::Path;

/// Writes `content` as the registry dump inside `base_dir` and returns a config
/// that reads it and writes tables next to it, without a progress bar.
#[allow(dead_code)]
pub fn config_for(base_dir: &Path, content: &str) -> ResolvedConfig {
    fs::create_dir_all(base_dir).unwrap();
    let config = ResolvedConfig {
        base_dir: base_dir.to_path_buf(),
        progress: false,
        ..ResolvedConfig::default()
    };
    fs::write(config.input_path(), content).unwrap();
    config
}

/// Reads a CSV table, returning its header and data rows.
#[allow(dead_code)]
pub fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

/// One Property, number "P1", with no Parcels, Photos or contaminated sites
#[allow(dead_code)]
pub const MINIMAL_PROPERTY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Properties>
  <Property createdDate="2003-05-14" lastModifiedDate="2017-11-02">
    <Custodian code="DND" isDepartment="true"><Name_E>National Defence</Name_E></Custodian>
    <Property_Number>P1</Property_Number>
    <Primary_Use_E>Military</Primary_Use_E>
    <Interest_Type_E>Crown owned</Interest_Type_E>
    <Restriction_on_Interest_E>None</Restriction_on_Interest_E>
  </Property>
</Properties>"#;

/// Two Properties sharing custodian "DND" with every kind of child record
#[allow(dead_code)]
pub const SAMPLE_REGISTRY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Properties>
  <Property createdDate="2003-05-14" lastModifiedDate="2017-11-02">
    <Custodian code="DND" isDepartment="true" portfolioLastCertifiedDate="2017-03-31">
      <Name_E>National Defence</Name_E>
      <Official_Contact_Name>J. Tremblay</Official_Contact_Name>
      <Official_Contact_Telephone>613-555-0100</Official_Contact_Telephone>
    </Custodian>
    <Property_Number>01234</Property_Number>
    <Property_Name_E>CFB Example, Main Site</Property_Name_E>
    <Address_E>100 Base Road</Address_E>
    <Primary_Use_E>Military</Primary_Use_E>
    <Interest_Type_E>Crown owned</Interest_Type_E>
    <Restriction_on_Interest_E/>
    <MiniMap>map-01234.png</MiniMap>
    <Parcels>
      <Parcel number="1">
        <Land_Area unitofMeasure="ha">120.5</Land_Area>
        <Building_Count>2</Building_Count>
        <Floor_Area unitofMeasure="m2">5400</Floor_Area>
        <ParkingSpaces><Exterior>80</Exterior><Interior includedInFloorArea="false">12</Interior></ParkingSpaces>
        <Location type="Canada" sgc="3506008" fed="35075" inUrbanArea="true" inRuralArea="false" inIsolatedArea="false">
          <Province_E>Ontario</Province_E>
          <Municipality_E>Ottawa</Municipality_E>
          <Latitude>45.4215</Latitude>
          <Longitude>-75.6972</Longitude>
          <Positional_Accuracy unitofMeasure="m">5</Positional_Accuracy>
        </Location>
        <Structures>
          <Structure occupancy="Occupied" createdDate="2004-01-01" lastModifiedDate="2016-06-30">
            <Custodian code="PWGSC"><Name_E>Public Services and Procurement</Name_E></Custodian>
            <Structure_Number>S-01</Structure_Number>
            <Structure_Name_E>Headquarters</Structure_Name_E>
            <Address_E>100 Base Road</Address_E>
            <Location><Latitude>45.4216</Latitude><Longitude>-75.6971</Longitude></Location>
            <Interest_Type_E>Crown owned</Interest_Type_E>
            <Condition_E>Good</Condition_E>
            <Floor_Area unitofMeasure="m2">5000</Floor_Area>
            <UseTypes>
              <UseType><Use_Name_E>Office</Use_Name_E></UseType>
              <UseType><Use_Name_E>Storage</Use_Name_E></UseType>
            </UseTypes>
            <Tenants>
              <Tenant code="RCMP"><Name_E>Royal Canadian Mounted Police</Name_E><Floor_Area unitofMeasure="m2">300</Floor_Area></Tenant>
            </Tenants>
            <Photos><Photo>s01-front.jpg</Photo></Photos>
          </Structure>
          <Structure>
            <Custodian code="DND"><Name_E>Defence (second spelling)</Name_E></Custodian>
            <Structure_Number>S-02</Structure_Number>
            <Structure_Name_E>Garage</Structure_Name_E>
            <Interest_Type_E>Crown owned</Interest_Type_E>
            <Floor_Area unitofMeasure="m2">400</Floor_Area>
            <UseTypes/>
          </Structure>
        </Structures>
      </Parcel>
    </Parcels>
    <FederalContaminatedSites>
      <Site FederalSiteIdentifier="00012345"/>
      <Site FederalSiteIdentifier="00012346"/>
    </FederalContaminatedSites>
    <Photos><Photo>p-aerial.jpg</Photo></Photos>
  </Property>
  <Property>
    <Custodian code="DND"><Name_E>Department of National Defence</Name_E></Custodian>
    <Property_Number>05678</Property_Number>
    <Primary_Use_E>Vacant</Primary_Use_E>
    <Interest_Type_E>Leased</Interest_Type_E>
    <Restriction_on_Interest_E>Lease</Restriction_on_Interest_E>
    <Parcels>
      <Parcel number="1">
        <Land_Area unitofMeasure="ha">3</Land_Area>
        <Building_Count>0</Building_Count>
        <Floor_Area/>
        <Location type="Canada"><Province_E>Québec</Province_E></Location>
      </Parcel>
      <Parcel number="2">
        <Land_Area unitofMeasure="ha">1</Land_Area>
        <Building_Count>0</Building_Count>
        <Floor_Area/>
        <Location type="Canada"/>
      </Parcel>
    </Parcels>
  </Property>
</Properties>"#;
