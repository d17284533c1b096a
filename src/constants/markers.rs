pub const END_MARKER: &str = "**END OF AUTOGENERATED CONTENT**";

pub const BEGIN_BLOCK: &[&str] = &[
    "// ----------------------------------------------------------------------------------- //",
    "// **BEGINNING OF AUTOGENERATED CONTENT** (TO ADD ADDITIONAL MANUAL CONTENT, LOOK FOR  //",
    "// THE \"END OF AUTOGENERATED CONTENT\" COMMENT BLOCK AND ADD YOUR CODE BELOW IT)        //",
    "// ----------------------------------------------------------------------------------- //",
];

pub const END_BLOCK: &[&str] = &[
    "// ----------------------------------------------------------------------------------- //",
    "// **END OF AUTOGENERATED CONTENT** (DO NOT EDIT/REMOVE THIS COMMENT BLOCK AND DO NOT  //",
    "// EDIT ANYTHING ABOVE IT. IF A NEW PRELUDE ITEM IS NEEDED, UPDATE THE PRELUDE IN      //",
    "// src/render/mod.rs OF multilevel-sensor-gen THEN RE-RUN THE GENERATOR. ALL LINES     //",
    "// WRITTEN BELOW THIS BLOCK WILL BE PRESERVED AS LONG AS THIS BLOCK REMAINS)           //",
    "// ----------------------------------------------------------------------------------- //",
    "",
];

// Lines from the end marker line to the first hand-written line
pub const PRESERVED_OFFSET: usize = 6;
