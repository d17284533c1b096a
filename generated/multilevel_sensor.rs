//! Constants for the Multilevel Sensor CC.

// ----------------------------------------------------------------------------------- //
// **BEGINNING OF AUTOGENERATED CONTENT** (TO ADD ADDITIONAL MANUAL CONTENT, LOOK FOR  //
// THE "END OF AUTOGENERATED CONTENT" COMMENT BLOCK AND ADD YOUR CODE BELOW IT)        //
// ----------------------------------------------------------------------------------- //

pub const CC_SPECIFIC_SCALE: &str = "scale";
pub const CC_SPECIFIC_SENSOR_TYPE: &str = "sensorType";

// ----------------------------------------------------------------------------------- //
// **END OF AUTOGENERATED CONTENT** (DO NOT EDIT/REMOVE THIS COMMENT BLOCK AND DO NOT  //
// EDIT ANYTHING ABOVE IT. IF A NEW PRELUDE ITEM IS NEEDED, UPDATE THE PRELUDE IN      //
// src/render/mod.rs OF multilevel-sensor-gen THEN RE-RUN THE GENERATOR. ALL LINES     //
// WRITTEN BELOW THIS BLOCK WILL BE PRESERVED AS LONG AS THIS BLOCK REMAINS)           //
// ----------------------------------------------------------------------------------- //

impl MultilevelSensorType {
    /// Scale enum that values of this sensor type are reported in.
    pub fn scale_kind(self) -> Option<MultilevelSensorScaleKind> {
        MULTILEVEL_SENSOR_TYPE_TO_SCALE_MAP
            .iter()
            .find(|(sensor_type, _)| *sensor_type == self)
            .map(|&(_, kind)| kind)
    }
}
