// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC entity class names per schema version
//!
//! Occurrence entities (subtypes of IfcProduct) that an object in a model can
//! be an instance of. Names are upper-case, as IDS expects them.

use onto2ids_model::{IdsVersion, IfcVersion};

/// Entity names valid in the given IFC version, in catalog order
pub fn names_for(version: IfcVersion) -> &'static [&'static str] {
    match version {
        IfcVersion::Ifc2x3 => IFC2X3_CLASS_NAMES,
        IfcVersion::Ifc4 => IFC4_CLASS_NAMES,
        IfcVersion::Ifc4x3 => IFC4X3_CLASS_NAMES,
    }
}

/// Entity names for an `ifcVersion` literal as spelled in the given IDS version
///
/// Unknown literals yield an empty slice.
pub fn names_for_literal(ids_version: IdsVersion, literal: &str) -> &'static [&'static str] {
    ids_version
        .parse_ifc_version(literal)
        .map(names_for)
        .unwrap_or(&[])
}

/// Whether `name` (any case) is a known entity of the given IFC version
pub fn contains(version: IfcVersion, name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    names_for(version).iter().any(|n| *n == upper)
}

const IFC2X3_CLASS_NAMES: &[&str] = &[
    "IFCANNOTATION",
    "IFCBEAM",
    "IFCBUILDING",
    "IFCBUILDINGELEMENTPART",
    "IFCBUILDINGELEMENTPROXY",
    "IFCBUILDINGSTOREY",
    "IFCCHAMFEREDGEFEATURE",
    "IFCCOLUMN",
    "IFCCOVERING",
    "IFCCURTAINWALL",
    "IFCDISCRETEACCESSORY",
    "IFCDISTRIBUTIONCHAMBERELEMENT",
    "IFCDISTRIBUTIONCONTROLELEMENT",
    "IFCDISTRIBUTIONELEMENT",
    "IFCDISTRIBUTIONFLOWELEMENT",
    "IFCDISTRIBUTIONPORT",
    "IFCDOOR",
    "IFCELECTRICALELEMENT",
    "IFCELEMENTASSEMBLY",
    "IFCENERGYCONVERSIONDEVICE",
    "IFCEQUIPMENTELEMENT",
    "IFCFASTENER",
    "IFCFLOWCONTROLLER",
    "IFCFLOWFITTING",
    "IFCFLOWMOVINGDEVICE",
    "IFCFLOWSEGMENT",
    "IFCFLOWSTORAGEDEVICE",
    "IFCFLOWTERMINAL",
    "IFCFLOWTREATMENTDEVICE",
    "IFCFOOTING",
    "IFCFURNISHINGELEMENT",
    "IFCGRID",
    "IFCMECHANICALFASTENER",
    "IFCMEMBER",
    "IFCOPENINGELEMENT",
    "IFCPILE",
    "IFCPLATE",
    "IFCPROJECTIONELEMENT",
    "IFCRAILING",
    "IFCRAMP",
    "IFCRAMPFLIGHT",
    "IFCREINFORCINGBAR",
    "IFCREINFORCINGMESH",
    "IFCROOF",
    "IFCROUNDEDEDGEFEATURE",
    "IFCSITE",
    "IFCSLAB",
    "IFCSPACE",
    "IFCSTAIR",
    "IFCSTAIRFLIGHT",
    "IFCTENDON",
    "IFCTENDONANCHOR",
    "IFCTRANSPORTELEMENT",
    "IFCVIRTUALELEMENT",
    "IFCWALL",
    "IFCWALLSTANDARDCASE",
    "IFCWINDOW",
];

const IFC4_CLASS_NAMES: &[&str] = &[
    "IFCACTUATOR",
    "IFCAIRTERMINAL",
    "IFCAIRTERMINALBOX",
    "IFCAIRTOAIRHEATRECOVERY",
    "IFCALARM",
    "IFCANNOTATION",
    "IFCAUDIOVISUALAPPLIANCE",
    "IFCBEAM",
    "IFCBEAMSTANDARDCASE",
    "IFCBOILER",
    "IFCBUILDING",
    "IFCBUILDINGELEMENTPART",
    "IFCBUILDINGELEMENTPROXY",
    "IFCBUILDINGSTOREY",
    "IFCBURNER",
    "IFCCABLECARRIERFITTING",
    "IFCCABLECARRIERSEGMENT",
    "IFCCABLEFITTING",
    "IFCCABLESEGMENT",
    "IFCCHILLER",
    "IFCCHIMNEY",
    "IFCCIVILELEMENT",
    "IFCCOIL",
    "IFCCOLUMN",
    "IFCCOLUMNSTANDARDCASE",
    "IFCCOMMUNICATIONSAPPLIANCE",
    "IFCCOMPRESSOR",
    "IFCCONDENSER",
    "IFCCONTROLLER",
    "IFCCOOLEDBEAM",
    "IFCCOOLINGTOWER",
    "IFCCOVERING",
    "IFCCURTAINWALL",
    "IFCDAMPER",
    "IFCDISCRETEACCESSORY",
    "IFCDISTRIBUTIONCHAMBERELEMENT",
    "IFCDISTRIBUTIONCONTROLELEMENT",
    "IFCDISTRIBUTIONELEMENT",
    "IFCDISTRIBUTIONFLOWELEMENT",
    "IFCDISTRIBUTIONPORT",
    "IFCDOOR",
    "IFCDOORSTANDARDCASE",
    "IFCDUCTFITTING",
    "IFCDUCTSEGMENT",
    "IFCDUCTSILENCER",
    "IFCELECTRICAPPLIANCE",
    "IFCELECTRICDISTRIBUTIONBOARD",
    "IFCELECTRICFLOWSTORAGEDEVICE",
    "IFCELECTRICGENERATOR",
    "IFCELECTRICMOTOR",
    "IFCELECTRICTIMECONTROL",
    "IFCELEMENTASSEMBLY",
    "IFCENERGYCONVERSIONDEVICE",
    "IFCENGINE",
    "IFCEVAPORATIVECOOLER",
    "IFCEVAPORATOR",
    "IFCEXTERNALSPATIALELEMENT",
    "IFCFAN",
    "IFCFASTENER",
    "IFCFILTER",
    "IFCFIRESUPPRESSIONTERMINAL",
    "IFCFLOWCONTROLLER",
    "IFCFLOWFITTING",
    "IFCFLOWINSTRUMENT",
    "IFCFLOWMETER",
    "IFCFLOWMOVINGDEVICE",
    "IFCFLOWSEGMENT",
    "IFCFLOWSTORAGEDEVICE",
    "IFCFLOWTERMINAL",
    "IFCFLOWTREATMENTDEVICE",
    "IFCFOOTING",
    "IFCFURNISHINGELEMENT",
    "IFCFURNITURE",
    "IFCGEOGRAPHICELEMENT",
    "IFCGRID",
    "IFCHEATEXCHANGER",
    "IFCHUMIDIFIER",
    "IFCINTERCEPTOR",
    "IFCJUNCTIONBOX",
    "IFCLAMP",
    "IFCLIGHTFIXTURE",
    "IFCMECHANICALFASTENER",
    "IFCMEDICALDEVICE",
    "IFCMEMBER",
    "IFCMEMBERSTANDARDCASE",
    "IFCMOTORCONNECTION",
    "IFCOPENINGELEMENT",
    "IFCOPENINGSTANDARDCASE",
    "IFCOUTLET",
    "IFCPILE",
    "IFCPIPEFITTING",
    "IFCPIPESEGMENT",
    "IFCPLATE",
    "IFCPLATESTANDARDCASE",
    "IFCPROJECTIONELEMENT",
    "IFCPROTECTIVEDEVICE",
    "IFCPROTECTIVEDEVICETRIPPINGUNIT",
    "IFCPUMP",
    "IFCRAILING",
    "IFCRAMP",
    "IFCRAMPFLIGHT",
    "IFCREINFORCINGBAR",
    "IFCREINFORCINGMESH",
    "IFCROOF",
    "IFCSANITARYTERMINAL",
    "IFCSENSOR",
    "IFCSHADINGDEVICE",
    "IFCSITE",
    "IFCSLAB",
    "IFCSLABELEMENTEDCASE",
    "IFCSLABSTANDARDCASE",
    "IFCSOLARDEVICE",
    "IFCSPACE",
    "IFCSPACEHEATER",
    "IFCSPATIALZONE",
    "IFCSTACKTERMINAL",
    "IFCSTAIR",
    "IFCSTAIRFLIGHT",
    "IFCSWITCHINGDEVICE",
    "IFCSYSTEMFURNITUREELEMENT",
    "IFCTANK",
    "IFCTENDON",
    "IFCTENDONANCHOR",
    "IFCTRANSFORMER",
    "IFCTRANSPORTELEMENT",
    "IFCTUBEBUNDLE",
    "IFCUNITARYCONTROLELEMENT",
    "IFCUNITARYEQUIPMENT",
    "IFCVALVE",
    "IFCVIBRATIONISOLATOR",
    "IFCVIRTUALELEMENT",
    "IFCVOIDINGFEATURE",
    "IFCWALL",
    "IFCWALLELEMENTEDCASE",
    "IFCWALLSTANDARDCASE",
    "IFCWASTETERMINAL",
    "IFCWINDOW",
    "IFCWINDOWSTANDARDCASE",
];

const IFC4X3_CLASS_NAMES: &[&str] = &[
    "IFCACTUATOR",
    "IFCAIRTERMINAL",
    "IFCAIRTERMINALBOX",
    "IFCAIRTOAIRHEATRECOVERY",
    "IFCALARM",
    "IFCALIGNMENT",
    "IFCANNOTATION",
    "IFCAUDIOVISUALAPPLIANCE",
    "IFCBEAM",
    "IFCBEARING",
    "IFCBOILER",
    "IFCBOREHOLE",
    "IFCBRIDGE",
    "IFCBRIDGEPART",
    "IFCBUILDING",
    "IFCBUILDINGELEMENTPART",
    "IFCBUILDINGELEMENTPROXY",
    "IFCBUILDINGSTOREY",
    "IFCBUILTELEMENT",
    "IFCBURNER",
    "IFCCABLECARRIERFITTING",
    "IFCCABLECARRIERSEGMENT",
    "IFCCABLEFITTING",
    "IFCCABLESEGMENT",
    "IFCCAISSONFOUNDATION",
    "IFCCHILLER",
    "IFCCHIMNEY",
    "IFCCIVILELEMENT",
    "IFCCOIL",
    "IFCCOLUMN",
    "IFCCOMMUNICATIONSAPPLIANCE",
    "IFCCOMPRESSOR",
    "IFCCONDENSER",
    "IFCCONTROLLER",
    "IFCCONVEYORSEGMENT",
    "IFCCOOLEDBEAM",
    "IFCCOOLINGTOWER",
    "IFCCOURSE",
    "IFCCOVERING",
    "IFCCURTAINWALL",
    "IFCDAMPER",
    "IFCDEEPFOUNDATION",
    "IFCDISCRETEACCESSORY",
    "IFCDISTRIBUTIONBOARD",
    "IFCDISTRIBUTIONCHAMBERELEMENT",
    "IFCDISTRIBUTIONCONTROLELEMENT",
    "IFCDISTRIBUTIONELEMENT",
    "IFCDISTRIBUTIONFLOWELEMENT",
    "IFCDISTRIBUTIONPORT",
    "IFCDOOR",
    "IFCDUCTFITTING",
    "IFCDUCTSEGMENT",
    "IFCDUCTSILENCER",
    "IFCEARTHWORKSCUT",
    "IFCEARTHWORKSELEMENT",
    "IFCEARTHWORKSFILL",
    "IFCELECTRICAPPLIANCE",
    "IFCELECTRICDISTRIBUTIONBOARD",
    "IFCELECTRICFLOWSTORAGEDEVICE",
    "IFCELECTRICFLOWTREATMENTDEVICE",
    "IFCELECTRICGENERATOR",
    "IFCELECTRICMOTOR",
    "IFCELECTRICTIMECONTROL",
    "IFCELEMENTASSEMBLY",
    "IFCENERGYCONVERSIONDEVICE",
    "IFCENGINE",
    "IFCEVAPORATIVECOOLER",
    "IFCEVAPORATOR",
    "IFCEXTERNALSPATIALELEMENT",
    "IFCFACILITY",
    "IFCFACILITYPART",
    "IFCFACILITYPARTCOMMON",
    "IFCFAN",
    "IFCFASTENER",
    "IFCFILTER",
    "IFCFIRESUPPRESSIONTERMINAL",
    "IFCFLOWCONTROLLER",
    "IFCFLOWFITTING",
    "IFCFLOWINSTRUMENT",
    "IFCFLOWMETER",
    "IFCFLOWMOVINGDEVICE",
    "IFCFLOWSEGMENT",
    "IFCFLOWSTORAGEDEVICE",
    "IFCFLOWTERMINAL",
    "IFCFLOWTREATMENTDEVICE",
    "IFCFOOTING",
    "IFCFURNISHINGELEMENT",
    "IFCFURNITURE",
    "IFCGEOGRAPHICELEMENT",
    "IFCGEOMODEL",
    "IFCGEOSLICE",
    "IFCGEOTECHNICALASSEMBLY",
    "IFCGRID",
    "IFCHEATEXCHANGER",
    "IFCHUMIDIFIER",
    "IFCIMPACTPROTECTIONDEVICE",
    "IFCINTERCEPTOR",
    "IFCJUNCTIONBOX",
    "IFCKERB",
    "IFCLAMP",
    "IFCLIGHTFIXTURE",
    "IFCLIQUIDTERMINAL",
    "IFCMARINEFACILITY",
    "IFCMARINEPART",
    "IFCMECHANICALFASTENER",
    "IFCMEDICALDEVICE",
    "IFCMEMBER",
    "IFCMOBILETELECOMMUNICATIONSAPPLIANCE",
    "IFCMOORINGDEVICE",
    "IFCMOTORCONNECTION",
    "IFCNAVIGATIONELEMENT",
    "IFCOPENINGELEMENT",
    "IFCOUTLET",
    "IFCPAVEMENT",
    "IFCPILE",
    "IFCPIPEFITTING",
    "IFCPIPESEGMENT",
    "IFCPLATE",
    "IFCPROJECTIONELEMENT",
    "IFCPROTECTIVEDEVICE",
    "IFCPROTECTIVEDEVICETRIPPINGUNIT",
    "IFCPUMP",
    "IFCRAIL",
    "IFCRAILING",
    "IFCRAILWAY",
    "IFCRAILWAYPART",
    "IFCRAMP",
    "IFCRAMPFLIGHT",
    "IFCREFERENT",
    "IFCREINFORCEDSOIL",
    "IFCREINFORCINGBAR",
    "IFCREINFORCINGMESH",
    "IFCROAD",
    "IFCROADPART",
    "IFCROOF",
    "IFCSANITARYTERMINAL",
    "IFCSENSOR",
    "IFCSHADINGDEVICE",
    "IFCSIGN",
    "IFCSIGNAL",
    "IFCSITE",
    "IFCSLAB",
    "IFCSOLARDEVICE",
    "IFCSOLIDSTRATUM",
    "IFCSPACE",
    "IFCSPACEHEATER",
    "IFCSPATIALZONE",
    "IFCSTACKTERMINAL",
    "IFCSTAIR",
    "IFCSTAIRFLIGHT",
    "IFCSURFACEFEATURE",
    "IFCSWITCHINGDEVICE",
    "IFCSYSTEMFURNITUREELEMENT",
    "IFCTANK",
    "IFCTENDON",
    "IFCTENDONANCHOR",
    "IFCTENDONCONDUIT",
    "IFCTRACKELEMENT",
    "IFCTRANSFORMER",
    "IFCTRANSPORTELEMENT",
    "IFCTUBEBUNDLE",
    "IFCUNITARYCONTROLELEMENT",
    "IFCUNITARYEQUIPMENT",
    "IFCVALVE",
    "IFCVEHICLE",
    "IFCVIBRATIONDAMPER",
    "IFCVIBRATIONISOLATOR",
    "IFCVIRTUALELEMENT",
    "IFCVOIDINGFEATURE",
    "IFCVOIDSTRATUM",
    "IFCWALL",
    "IFCWASTETERMINAL",
    "IFCWATERSTRATUM",
    "IFCWINDOW",
];
