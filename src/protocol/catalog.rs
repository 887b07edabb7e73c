//! Built-in descriptor table
//!
//! One entry per (id, shape). Unnamed wire positions are listed as
//! reserved so every schema's width matches what the controller sends.
//! Ids `0x0448` and `0x0453` appear in both shapes.

use super::{Field, FieldSchema, MessageDescriptor};

static HW_INFO: [Field; 9] = [
    Field::u32("serial_number"),
    Field::bytes("model_number", 8),
    Field::u16("hw_type"),
    Field::bytes("firmware_version", 4),
    Field::bytes("notes", 48),
    Field::reserved(12),
    Field::u16("hw_version"),
    Field::u16("mod_state"),
    Field::u16("nchs"),
];

static HW_RICHRESPONSE: [Field; 3] = [
    Field::u16("msg_ident"),
    Field::u16("code"),
    Field::bytes("notes", 64),
];

static POSCOUNTER: [Field; 2] = [Field::u16("chan_ident"), Field::i32("position")];

static ENCCOUNTER: [Field; 2] = [Field::u16("chan_ident"), Field::i32("encoder_count")];

static VELPARAMS: [Field; 4] = [
    Field::u16("chan_ident"),
    Field::u32("min_velocity"),
    Field::u32("acceleration"),
    Field::u32("max_velocity"),
];

static JOGPARAMS: [Field; 7] = [
    Field::u16("chan_ident"),
    Field::u16("jog_mode"),
    Field::u32("jog_step_size"),
    Field::u32("jog_min_velocity"),
    Field::u32("jog_acceleration"),
    Field::u32("jog_max_velocity"),
    Field::u16("jog_stop_mode"),
];

static ADCINPUTS: [Field; 2] = [Field::u16("adc_input1"), Field::u16("adc_input2")];

static POWERPARAMS: [Field; 3] = [
    Field::u16("chan_ident"),
    Field::u16("rest_factor"),
    Field::u16("move_factor"),
];

static GENMOVEPARAMS: [Field; 2] = [Field::u16("chan_ident"), Field::i32("backlash_distance")];

static MOVERELPARAMS: [Field; 2] = [Field::u16("chan_ident"), Field::i32("relative_distance")];

static MOVEABSPARAMS: [Field; 2] = [Field::u16("chan_ident"), Field::i32("absolute_position")];

static HOMEPARAMS: [Field; 5] = [
    Field::u16("chan_ident"),
    Field::u16("home_direction"),
    Field::u16("limit_switch"),
    Field::u32("home_velocity"),
    Field::u32("offset_distance"),
];

static LIMSWITCHPARAMS: [Field; 6] = [
    Field::u16("chan_ident"),
    Field::u16("cw_hard_limit"),
    Field::u16("ccw_hard_limit"),
    Field::u32("cw_soft_limit"),
    Field::u32("ccw_soft_limit"),
    Field::u16("software_limit_mode"),
];

static MOVE_STATUS: [Field; 4] = [
    Field::u16("chan_ident"),
    Field::i32("position"),
    Field::reserved(4),
    Field::u32("status_bits"),
];

static MOVE_ABSOLUTE: [Field; 2] = [Field::u16("chan_ident"), Field::i32("absolute_distance")];

static BOWINDEX: [Field; 2] = [Field::u16("chan_ident"), Field::u16("bow_index")];

static DCPIDPARAMS: [Field; 6] = [
    Field::u16("chan_ident"),
    Field::u32("proportional"),
    Field::u32("integral"),
    Field::u32("differential"),
    Field::u32("integral_limit"),
    Field::u16("filter_control"),
];

static AVMODES: [Field; 2] = [Field::u16("chan_ident"), Field::u16("mode_bits")];

static POTPARAMS: [Field; 9] = [
    Field::u16("chan_ident"),
    Field::u16("zero_wnd"),
    Field::u32("vel1"),
    Field::u16("wnd1"),
    Field::u32("vel2"),
    Field::u16("wnd2"),
    Field::u32("vel3"),
    Field::u16("wnd3"),
    Field::u32("vel4"),
];

static BUTTONPARAMS: [Field; 6] = [
    Field::u16("chan_ident"),
    Field::u16("mode"),
    Field::i32("position1"),
    Field::i32("position2"),
    Field::u16("timeout"),
    Field::reserved(2),
];

static EEPROMPARAMS: [Field; 2] = [Field::u16("chan_ident"), Field::u16("msg_id")];

static PMDPOSITIONLOOPPARAMS: [Field; 12] = [
    Field::u16("chan_ident"),
    Field::u16("kp_pos"),
    Field::u16("integral"),
    Field::u32("i_lim_pos"),
    Field::u16("differential"),
    Field::u16("kd_time_pos"),
    Field::u16("k_out_pos"),
    Field::u16("k_vff_pos"),
    Field::u16("k_aff_pos"),
    Field::u32("pos_err_limit"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDMOTOROUTPUTPARAMS: [Field; 7] = [
    Field::u16("chan_ident"),
    Field::u16("cont_current_lim"),
    Field::u16("energy_lim"),
    Field::u16("motor_lim"),
    Field::u16("motor_bias"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDTRACKSETTLEPARAMS: [Field; 6] = [
    Field::u16("chan_ident"),
    Field::u16("time"),
    Field::u16("settle_window"),
    Field::u16("track_window"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDPROFILEMODEPARAMS: [Field; 5] = [
    Field::u16("chan_ident"),
    Field::u16("mode"),
    Field::u32("jerk"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDJOYSTICKPARAMS: [Field; 6] = [
    Field::u16("chan_ident"),
    Field::u32("js_gear_low_max_vel"),
    Field::u32("js_gear_high_max_vel"),
    Field::u32("js_gear_low_accn"),
    Field::u32("js_gear_high_accn"),
    Field::u16("dir_sense"),
];

static PMDCURRENTLOOPPARAMS: [Field; 9] = [
    Field::u16("chan_ident"),
    Field::u16("phase"),
    Field::u16("kp_current"),
    Field::u16("ki_current"),
    Field::u16("i_lim_current"),
    Field::u16("i_dead_band"),
    Field::u16("kff"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDSETTLEDCURRENTLOOPPARAMS: [Field; 9] = [
    Field::u16("chan_ident"),
    Field::u16("phase"),
    Field::u16("kp_settled"),
    Field::u16("ki_settled"),
    Field::u16("i_lim_settled"),
    Field::u16("dead_band_set"),
    Field::u16("kff_settled"),
    Field::reserved(2),
    Field::reserved(2),
];

static PMDSTAGEAXISPARAMS: [Field; 19] = [
    Field::u16("chan_ident"),
    Field::u16("stage_id"),
    Field::u16("axis_id"),
    Field::bytes("part_no_axis", 16),
    Field::u32("serial_num"),
    Field::u32("cnts_per_unit"),
    Field::u32("min_pos"),
    Field::u32("max_pos"),
    Field::u32("max_accn"),
    Field::u32("max_dec"),
    Field::u32("max_vel"),
    Field::reserved(2),
    Field::reserved(2),
    Field::reserved(2),
    Field::reserved(2),
    Field::reserved(4),
    Field::reserved(4),
    Field::reserved(4),
    Field::reserved(4),
];

static STATUSUPDATE: [Field; 4] = [
    Field::u16("chan_ident"),
    Field::i32("position"),
    Field::u32("enc_count"),
    Field::u32("status_bits"),
];

static DCSTATUSUPDATE: [Field; 5] = [
    Field::u16("chan_ident"),
    Field::i32("position"),
    Field::i16("velocity"),
    Field::reserved(2),
    Field::u32("status_bits"),
];

static STATUSBITS: [Field; 2] = [Field::u16("chan_ident"), Field::u32("status_bits")];

/// Every built-in descriptor
pub static DESCRIPTORS: &[MessageDescriptor] = &[
    // Generic hardware and module control
    MessageDescriptor::short(0x0002, "HW_DISCONNECT", [None, None]),
    MessageDescriptor::short(0x0005, "HW_REQ_INFO", [None, None]),
    MessageDescriptor::long(0x0006, "HW_GET_INFO", FieldSchema::new(&HW_INFO)),
    MessageDescriptor::short(0x0011, "HW_START_UPDATEMSGS", [Some("update_rate"), None]),
    MessageDescriptor::short(0x0012, "HW_STOP_UPDATEMSGS", [None, None]),
    MessageDescriptor::short(0x0080, "HW_RESPONSE", [None, None]),
    MessageDescriptor::long(
        0x0081,
        "HW_RICHRESPONSE",
        FieldSchema::new(&HW_RICHRESPONSE),
    ),
    MessageDescriptor::short(
        0x0210,
        "MOD_SET_CHANENABLESTATE",
        [Some("chan_ident"), Some("enable_state")],
    ),
    MessageDescriptor::short(
        0x0211,
        "MOD_REQ_CHANENABLESTATE",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::short(
        0x0212,
        "MOD_GET_CHANENABLESTATE",
        [Some("chan_ident"), Some("enable_state")],
    ),
    MessageDescriptor::short(0x0223, "MOD_IDENTIFY", [Some("chan_ident"), None]),
    // Motor control
    MessageDescriptor::short(0x0017, "HW_YES_FLASH_PROGRAMMING", [None, None]),
    MessageDescriptor::short(0x0018, "HW_NO_FLASH_PROGRAMMING", [None, None]),
    MessageDescriptor::long(0x0410, "MOT_SET_POSCOUNTER", FieldSchema::new(&POSCOUNTER)),
    MessageDescriptor::short(0x0411, "MOT_REQ_POSCOUNTER", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x0412, "MOT_GET_POSCOUNTER", FieldSchema::new(&POSCOUNTER)),
    MessageDescriptor::long(0x0409, "MOT_SET_ENCCOUNTER", FieldSchema::new(&ENCCOUNTER)),
    MessageDescriptor::short(0x040A, "MOT_REQ_ENCCOUNTER", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x040B, "MOT_GET_ENCCOUNTER", FieldSchema::new(&ENCCOUNTER)),
    MessageDescriptor::long(0x0413, "MOT_SET_VELPARAMS", FieldSchema::new(&VELPARAMS)),
    MessageDescriptor::short(0x0414, "MOT_REQ_VELPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x0415, "MOT_GET_VELPARAMS", FieldSchema::new(&VELPARAMS)),
    MessageDescriptor::long(0x0416, "MOT_SET_JOGPARAMS", FieldSchema::new(&JOGPARAMS)),
    MessageDescriptor::short(0x0417, "MOT_REQ_JOGPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x0418, "MOT_GET_JOGPARAMS", FieldSchema::new(&JOGPARAMS)),
    MessageDescriptor::short(0x042B, "MOT_REQ_ADCINPUTS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x042C, "MOT_GET_ADCINPUTS", FieldSchema::new(&ADCINPUTS)),
    MessageDescriptor::long(
        0x0426,
        "MOT_SET_POWERPARAMS",
        FieldSchema::new(&POWERPARAMS),
    ),
    MessageDescriptor::short(0x0427, "MOT_REQ_POWERPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0428,
        "MOT_GET_POWERPARAMS",
        FieldSchema::new(&POWERPARAMS),
    ),
    MessageDescriptor::long(
        0x043A,
        "MOT_SET_GENMOVEPARAMS",
        FieldSchema::new(&GENMOVEPARAMS),
    ),
    MessageDescriptor::short(0x043B, "MOT_REQ_GENMOVEPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x043C,
        "MOT_GET_GENMOVEPARAMS",
        FieldSchema::new(&GENMOVEPARAMS),
    ),
    MessageDescriptor::long(
        0x0445,
        "MOT_SET_MOVERELPARAMS",
        FieldSchema::new(&MOVERELPARAMS),
    ),
    MessageDescriptor::short(0x0446, "MOT_REQ_MOVERELPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0447,
        "MOT_GET_MOVERELPARAMS",
        FieldSchema::new(&MOVERELPARAMS),
    ),
    MessageDescriptor::long(
        0x0450,
        "MOT_SET_MOVEABSPARAMS",
        FieldSchema::new(&MOVEABSPARAMS),
    ),
    MessageDescriptor::short(0x0451, "MOT_REQ_MOVEABSPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0452,
        "MOT_GET_MOVEABSPARAMS",
        FieldSchema::new(&MOVEABSPARAMS),
    ),
    MessageDescriptor::long(0x0440, "MOT_SET_HOMEPARAMS", FieldSchema::new(&HOMEPARAMS)),
    MessageDescriptor::short(0x0441, "MOT_REQ_HOMEPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x0442, "MOT_GET_HOMEPARAMS", FieldSchema::new(&HOMEPARAMS)),
    MessageDescriptor::long(
        0x0423,
        "MOT_SET_LIMSWITCHPARAMS",
        FieldSchema::new(&LIMSWITCHPARAMS),
    ),
    MessageDescriptor::short(
        0x0424,
        "MOT_REQ_LIMSWITCHPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x0425,
        "MOT_GET_LIMSWITCHPARAMS",
        FieldSchema::new(&LIMSWITCHPARAMS),
    ),
    MessageDescriptor::short(0x0443, "MOT_MOVE_HOME", [Some("chan_ident"), None]),
    MessageDescriptor::short(0x0444, "MOT_MOVE_HOMED", [Some("chan_ident"), None]),
    MessageDescriptor::short(0x0448, "MOT_MOVE_RELATIVE", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0448,
        "MOT_MOVE_RELATIVE",
        FieldSchema::new(&MOVERELPARAMS),
    ),
    MessageDescriptor::long(0x0464, "MOT_MOVE_COMPLETED", FieldSchema::new(&MOVE_STATUS)),
    MessageDescriptor::short(0x0453, "MOT_MOVE_ABSOLUTE", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0453,
        "MOT_MOVE_ABSOLUTE",
        FieldSchema::new(&MOVE_ABSOLUTE),
    ),
    MessageDescriptor::short(
        0x046A,
        "MOT_MOVE_JOG",
        [Some("chan_ident"), Some("direction")],
    ),
    MessageDescriptor::short(
        0x0457,
        "MOT_MOVE_VELOCITY",
        [Some("chan_ident"), Some("direction")],
    ),
    MessageDescriptor::short(
        0x0465,
        "MOT_MOVE_STOP",
        [Some("chan_ident"), Some("stop_mode")],
    ),
    MessageDescriptor::long(0x0466, "MOT_MOVE_STOPPED", FieldSchema::new(&MOVE_STATUS)),
    MessageDescriptor::long(0x04F4, "MOT_SET_BOWINDEX", FieldSchema::new(&BOWINDEX)),
    MessageDescriptor::short(0x04F5, "MOT_REQ_BOWINDEX", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x04F6, "MOT_GET_BOWINDEX", FieldSchema::new(&BOWINDEX)),
    MessageDescriptor::long(
        0x04A0,
        "MOT_SET_DCPIDPARAMS",
        FieldSchema::new(&DCPIDPARAMS),
    ),
    MessageDescriptor::short(0x04A1, "MOT_REQ_DCPIDPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x04A2,
        "MOT_GET_DCPIDPARAMS",
        FieldSchema::new(&DCPIDPARAMS),
    ),
    MessageDescriptor::long(0x04B3, "MOT_SET_AVMODES", FieldSchema::new(&AVMODES)),
    MessageDescriptor::short(0x04B4, "MOT_REQ_AVMODES", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x04B5, "MOT_GET_AVMODES", FieldSchema::new(&AVMODES)),
    MessageDescriptor::long(0x04B0, "MOT_SET_POTPARAMS", FieldSchema::new(&POTPARAMS)),
    MessageDescriptor::short(0x04B1, "MOT_REQ_POTPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x04B2, "MOT_GET_POTPARAMS", FieldSchema::new(&POTPARAMS)),
    MessageDescriptor::long(
        0x04B6,
        "MOT_SET_BUTTONPARAMS",
        FieldSchema::new(&BUTTONPARAMS),
    ),
    MessageDescriptor::short(0x04B7, "MOT_REQ_BUTTONPARAMS", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x04B8,
        "MOT_GET_BUTTONPARAMS",
        FieldSchema::new(&BUTTONPARAMS),
    ),
    MessageDescriptor::long(
        0x04B9,
        "MOT_SET_EEPROMPARAMS",
        FieldSchema::new(&EEPROMPARAMS),
    ),
    MessageDescriptor::long(
        0x04D7,
        "MOT_SET_PMDPOSITIONLOOPPARAMS",
        FieldSchema::new(&PMDPOSITIONLOOPPARAMS),
    ),
    MessageDescriptor::short(
        0x04D8,
        "MOT_REQ_PMDPOSITIONLOOPPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04D9,
        "MOT_GET_PMDPOSITIONLOOPPARAMS",
        FieldSchema::new(&PMDPOSITIONLOOPPARAMS),
    ),
    MessageDescriptor::long(
        0x04DA,
        "MOT_SET_PMDMOTOROUTPUTPARAMS",
        FieldSchema::new(&PMDMOTOROUTPUTPARAMS),
    ),
    MessageDescriptor::short(
        0x04DB,
        "MOT_REQ_PMDMOTOROUTPUTPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04DC,
        "MOT_GET_PMDMOTOROUTPUTPARAMS",
        FieldSchema::new(&PMDMOTOROUTPUTPARAMS),
    ),
    MessageDescriptor::long(
        0x04E0,
        "MOT_SET_PMDTRACKSETTLEPARAMS",
        FieldSchema::new(&PMDTRACKSETTLEPARAMS),
    ),
    MessageDescriptor::short(
        0x04E1,
        "MOT_REQ_PMDTRACKSETTLEPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04E2,
        "MOT_GET_PMDTRACKSETTLEPARAMS",
        FieldSchema::new(&PMDTRACKSETTLEPARAMS),
    ),
    MessageDescriptor::long(
        0x04E3,
        "MOT_SET_PMDPROFILEMODEPARAMS",
        FieldSchema::new(&PMDPROFILEMODEPARAMS),
    ),
    MessageDescriptor::short(
        0x04E4,
        "MOT_REQ_PMDPROFILEMODEPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04E5,
        "MOT_GET_PMDPROFILEMODEPARAMS",
        FieldSchema::new(&PMDPROFILEMODEPARAMS),
    ),
    MessageDescriptor::long(
        0x04E6,
        "MOT_SET_PMDJOYSTICKPARAMS",
        FieldSchema::new(&PMDJOYSTICKPARAMS),
    ),
    MessageDescriptor::short(
        0x04E7,
        "MOT_REQ_PMDJOYSTICKPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04E8,
        "MOT_GET_PMDJOYSTICKPARAMS",
        FieldSchema::new(&PMDJOYSTICKPARAMS),
    ),
    MessageDescriptor::long(
        0x04D4,
        "MOT_SET_PMDCURRENTLOOPPARAMS",
        FieldSchema::new(&PMDCURRENTLOOPPARAMS),
    ),
    MessageDescriptor::short(
        0x04D5,
        "MOT_REQ_PMDCURRENTLOOPPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04D6,
        "MOT_GET_PMDCURRENTLOOPPARAMS",
        FieldSchema::new(&PMDCURRENTLOOPPARAMS),
    ),
    MessageDescriptor::long(
        0x04E9,
        "MOT_SET_PMDSETTLEDCURRENTLOOPPARAMS",
        FieldSchema::new(&PMDSETTLEDCURRENTLOOPPARAMS),
    ),
    MessageDescriptor::short(
        0x04EA,
        "MOT_REQ_PMDSETTLEDCURRENTLOOPPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04EB,
        "MOT_GET_PMDSETTLEDCURRENTLOOPPARAMS",
        FieldSchema::new(&PMDSETTLEDCURRENTLOOPPARAMS),
    ),
    MessageDescriptor::long(
        0x04F0,
        "MOT_SET_PMDSTAGEAXISPARAMS",
        FieldSchema::new(&PMDSTAGEAXISPARAMS),
    ),
    MessageDescriptor::short(
        0x04F1,
        "MOT_REQ_PMDSTAGEAXISPARAMS",
        [Some("chan_ident"), None],
    ),
    MessageDescriptor::long(
        0x04F2,
        "MOT_GET_PMDSTAGEAXISPARAMS",
        FieldSchema::new(&PMDSTAGEAXISPARAMS),
    ),
    MessageDescriptor::short(
        0x04FE,
        "MOT_SET_TSTACTUATORTYPE",
        [Some("actuator_ident"), None],
    ),
    MessageDescriptor::short(0x0480, "MOT_REQ_STATUSUPDATE", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0481,
        "MOT_GET_STATUSUPDATE",
        FieldSchema::new(&STATUSUPDATE),
    ),
    MessageDescriptor::short(0x0490, "MOT_REQ_DCSTATUSUPDATE", [Some("chan_ident"), None]),
    MessageDescriptor::long(
        0x0491,
        "MOT_GET_DCSTATUSUPDATE",
        FieldSchema::new(&DCSTATUSUPDATE),
    ),
    MessageDescriptor::short(0x0492, "MOT_ACK_DCSTATUSUPDATE", [None, None]),
    MessageDescriptor::short(0x0429, "MOT_REQ_STATUSBITS", [Some("chan_ident"), None]),
    MessageDescriptor::long(0x042A, "MOT_GET_STATUSBITS", FieldSchema::new(&STATUSBITS)),
    MessageDescriptor::short(0x046B, "MOT_SUSPEND_ENDOFMOVEMSGS", [None, None]),
    MessageDescriptor::short(0x046C, "MOT_RESUME_ENDOFMOVEMSGS", [None, None]),
    MessageDescriptor::short(
        0x0500,
        "MOT_SET_TRIGGER",
        [Some("chan_ident"), Some("mode")],
    ),
    MessageDescriptor::short(0x0501, "MOT_REQ_TRIGGER", [Some("chan_ident"), None]),
    MessageDescriptor::short(
        0x0502,
        "MOT_GET_TRIGGER",
        [Some("chan_ident"), Some("mode")],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{MessageShape, Registry};

    #[test]
    fn test_catalog_builds() {
        let registry = Registry::new(DESCRIPTORS.iter().copied()).unwrap();
        assert_eq!(registry.descriptors().count(), DESCRIPTORS.len());
    }

    #[test]
    fn test_known_widths() {
        let registry = Registry::global();
        let width = |name| registry.find(name).map(MessageDescriptor::payload_len);

        assert_eq!(width("HW_GET_INFO"), Some(84));
        assert_eq!(width("MOT_MOVE_COMPLETED"), Some(14));
        assert_eq!(width("MOT_GET_DCSTATUSUPDATE"), Some(14));
        assert_eq!(width("MOT_GET_PMDSTAGEAXISPARAMS"), Some(74));
        assert_eq!(width("MOT_SET_JOGPARAMS"), Some(22));
    }

    #[test]
    fn test_only_move_commands_are_dual() {
        let mut dual: Vec<u16> = Registry::global()
            .descriptors()
            .filter(|desc| desc.shape() == MessageShape::Short)
            .map(MessageDescriptor::id)
            .filter(|id| Registry::global().lookup(*id).is_some_and(|v| v.is_dual()))
            .collect();
        dual.sort_unstable();

        assert_eq!(dual, [0x0448, 0x0453]);
    }
}
