// Input defaults
pub const DEFAULT_BASE_DIR: &str = "data/dfrp";
pub const DEFAULT_INPUT_FILE: &str = "dfrp-rbif.xml";

// Separator between use-type names in the Structure UseTypes column
pub const USE_TYPE_SEPARATOR: &str = " | ";

// Source schema element names
pub const PROPERTY_ELEMENT: &str = "Property";
pub const CUSTODIAN_ELEMENT: &str = "Custodian";
pub const UNIT_OF_MEASURE_ATTR: &str = "unitofMeasure";
