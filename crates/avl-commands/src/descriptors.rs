//! Protocol descriptor constants.
//!
//! These constants are the interoperability contract between the ground
//! station and vehicle firmware: the one-byte packet type descriptors, the
//! field descriptors scoped to each packet type, and the small value code
//! tables carried inside fields. The numeric values are fixed and
//! versioned; changing any of them breaks wire compatibility.

// ============================================================================
// Packet descriptors
// ============================================================================

/// Response to a previously received packet.
pub const RESPONSE_PACKET_DESC: u8 = 0x00;
/// Vehicle telemetry status report.
pub const STATUS_PACKET_DESC: u8 = 0x01;
/// Immediate vehicle action command.
pub const ACTION_PACKET_DESC: u8 = 0x02;
/// Manual helm (throttle/rudder/elevator) command.
pub const HELM_PACKET_DESC: u8 = 0x03;
/// Acoustic ranging ping announcement.
pub const ACOUSTIC_PING_PACKET_DESC: u8 = 0x04;
/// Mission management command.
pub const MISSION_PACKET_DESC: u8 = 0x05;
/// A single mission task. Nested inside MISSION packet fields.
pub const TASK_PACKET_DESC: u8 = 0x07;
/// A single named vehicle parameter.
pub const PARAMETER_PACKET_DESC: u8 = 0x08;
/// Parameter list transfer.
pub const PARAMETER_LIST_PACKET_DESC: u8 = 0x09;

// ============================================================================
// Global field descriptors
// ============================================================================
// Routing metadata present in almost every outbound packet, appended by the
// transport layer after the semantic fields.

/// Comms channel the packet should travel over.
pub const COMMS_CHANNEL_DESC: u8 = 0xFE;
/// Target or source vehicle ID.
pub const VEHICLE_ID_DESC: u8 = 0xFF;

// ============================================================================
// RESPONSE packet field descriptors
// ============================================================================

/// Descriptor of the packet being responded to.
pub const RESPONSE_PACKET_DESCRIPTOR_DESC: u8 = 0x00;
/// Descriptor of the field being responded to.
pub const RESPONSE_FIELD_DESCRIPTOR_DESC: u8 = 0x01;
/// Response payload. May itself be a serialized packet stream.
pub const RESPONSE_DATA_DESC: u8 = 0x02;

// ============================================================================
// STATUS packet field descriptors
// ============================================================================

/// Vehicle mode name string.
pub const STATUS_MODE_DESC: u8 = 0x00;
/// Operational status name string.
pub const STATUS_OPERATIONAL_STATUS_DESC: u8 = 0x01;
/// Roll, pitch, yaw in degrees (3 doubles).
pub const STATUS_ATTITUDE_DESC: u8 = 0x02;
/// Velocity components (3 doubles).
pub const STATUS_VELOCITY_DESC: u8 = 0x03;
/// Latitude, longitude, altitude (3 doubles).
pub const STATUS_POSITION_DESC: u8 = 0x04;
/// Depth below surface in meters (double).
pub const STATUS_DEPTH_DESC: u8 = 0x05;
/// Height above bottom in meters (double).
pub const STATUS_HEIGHT_DESC: u8 = 0x06;
/// Propeller RPM (double).
pub const STATUS_RPM_DESC: u8 = 0x07;
/// Battery voltage (double).
pub const STATUS_VOLTAGE_DESC: u8 = 0x08;
/// Magnetic flux components (3 doubles).
pub const STATUS_MAG_FLUX_DESC: u8 = 0x09;
/// Micromodem time sync flag (1 byte).
pub const STATUS_UMODEM_SYNCED_DESC: u8 = 0x0A;
/// Number of GPS satellites in use (1 byte).
pub const STATUS_GPS_SATS_DESC: u8 = 0x0B;
/// Iridium signal strength in bars (1 byte).
pub const STATUS_IRIDIUM_STRENGTH_DESC: u8 = 0x0C;
/// Mission progress: current task, total tasks, percent complete.
pub const STATUS_TASK_DESC: u8 = 0x0D;

// ============================================================================
// ACTION packet field descriptors
// ============================================================================

/// Connectivity check, no payload.
pub const ACTION_PING_DESC: u8 = 0x00;
/// Immediately stop all actuation.
pub const ACTION_EMERGENCY_STOP_DESC: u8 = 0x01;
/// Power cycle the vehicle computer.
pub const ACTION_POWER_CYCLE_DESC: u8 = 0x02;
/// Restart the onboard software stack.
pub const ACTION_RESTART_ROS_DESC: u8 = 0x03;
/// Reset the safety system after a fault.
pub const ACTION_RESET_SAFETY_DESC: u8 = 0x04;
/// Set the vehicle mode (mode name string payload).
pub const ACTION_SET_MODE_DESC: u8 = 0x05;
/// Enable or disable magnetometer streaming (1 byte).
pub const ACTION_SET_MAG_STREAM_DESC: u8 = 0x06;
/// Magnetometer calibration matrix and vector (12 doubles).
pub const ACTION_SET_MAG_CAL_DESC: u8 = 0x07;
/// Zero the pressure sensor at the surface.
pub const ACTION_TARE_PRESSURE_DESC: u8 = 0x08;
/// Start long-baseline acoustic pings.
pub const ACTION_START_LBL_PINGS_DESC: u8 = 0x09;
/// Start one-way travel-time pings.
pub const ACTION_START_OWTT_PINGS_DESC: u8 = 0x0A;
/// Stop all acoustic pings.
pub const ACTION_STOP_ACOUSTIC_PINGS_DESC: u8 = 0x0B;
/// Hand control to the back seat driver.
pub const ACTION_ENABLE_BACK_SEAT_DRIVER_DESC: u8 = 0x0C;
/// Take control from the back seat driver.
pub const ACTION_DISABLE_BACK_SEAT_DRIVER_DESC: u8 = 0x0D;
/// Geofence polygon vertices (interleaved lat, lon doubles).
pub const ACTION_SET_GEOFENCE_DESC: u8 = 0x0E;
/// Turn the strobe light on.
pub const ACTION_ENABLE_STROBE_DESC: u8 = 0x0F;
/// Turn the strobe light off.
pub const ACTION_DISABLE_STROBE_DESC: u8 = 0x10;
/// Power the sonar on.
pub const ACTION_ENABLE_SONAR_DESC: u8 = 0x11;
/// Power the sonar off.
pub const ACTION_DISABLE_SONAR_DESC: u8 = 0x12;
/// Start recording sonar data.
pub const ACTION_START_SONAR_RECORDING_DESC: u8 = 0x13;
/// Stop recording sonar data.
pub const ACTION_STOP_SONAR_RECORDING_DESC: u8 = 0x14;

// ============================================================================
// MISSION packet field descriptors
// ============================================================================

/// Start executing the loaded mission.
pub const MISSION_START_DESC: u8 = 0x01;
/// Stop mission execution.
pub const MISSION_STOP_DESC: u8 = 0x02;
/// Clear the loaded mission.
pub const MISSION_CLEAR_DESC: u8 = 0x03;
/// Advance to the next task.
pub const MISSION_ADVANCE_DESC: u8 = 0x04;
/// Replace the current task (one serialized TASK packet).
pub const MISSION_SET_DESC: u8 = 0x05;
/// Append tasks (serialized TASK packets, back to back).
pub const MISSION_APPEND_DESC: u8 = 0x06;
/// Request the currently executing task.
pub const MISSION_READ_CURRENT_DESC: u8 = 0x07;
/// Request the entire loaded mission.
pub const MISSION_READ_ALL_DESC: u8 = 0x08;

// ============================================================================
// TASK packet field descriptors
// ============================================================================

/// Task duration in seconds (double).
pub const TASK_DURATION_DESC: u8 = 0x00;
/// Task type code (1 byte).
pub const TASK_TYPE_DESC: u8 = 0x01;
/// Commanded roll, pitch, yaw (3 doubles).
pub const TASK_ATTITUDE_DESC: u8 = 0x02;
/// Commanded velocity components (3 doubles).
pub const TASK_VELOCITY_DESC: u8 = 0x03;
/// Commanded depth in meters (double).
pub const TASK_DEPTH_DESC: u8 = 0x04;
/// Commanded height above bottom in meters (double).
pub const TASK_HEIGHT_DESC: u8 = 0x05;
/// Commanded propeller RPM (double).
pub const TASK_RPM_DESC: u8 = 0x06;
/// Dive flag (1 byte).
pub const TASK_DIVE_DESC: u8 = 0x07;
/// Task points, 4 doubles per point: lat, lon, placeholder, command.
pub const TASK_POINTS_DESC: u8 = 0x08;
/// Overall task action command code (1 byte).
pub const TASK_COMMAND_DESC: u8 = 0x09;

// ============================================================================
// HELM packet field descriptors
// ============================================================================

/// Throttle percentage (double).
pub const HELM_THROTTLE_DESC: u8 = 0x00;
/// Rudder angle in degrees (double).
pub const HELM_RUDDER_DESC: u8 = 0x01;
/// Elevator angle in degrees (double).
pub const HELM_ELEVATOR_DESC: u8 = 0x02;

// ============================================================================
// ACOUSTIC_PING packet field descriptors
// ============================================================================

/// Ping departure time (double).
pub const ACOUSTIC_PING_DEPARTURE_TIME_DESC: u8 = 0x00;
/// Ping origin latitude, longitude, altitude (3 doubles).
pub const ACOUSTIC_PING_ORIGIN_POSITION_DESC: u8 = 0x01;

// ============================================================================
// PARAMETER packet field descriptors
// ============================================================================

/// Parameter name string.
pub const PARAMETER_NAME_DESC: u8 = 0x00;
/// Parameter value bytes, interpreted per the type field.
pub const PARAMETER_VALUE_DESC: u8 = 0x01;
/// Parameter type name string ("bool", "int", "double", "string").
pub const PARAMETER_TYPE_DESC: u8 = 0x02;

// ============================================================================
// PARAMETER_LIST packet field descriptors
// ============================================================================

/// Serialized PARAMETER packets, back to back.
pub const PARAMETER_LIST_DESC: u8 = 0x00;
/// Request the vehicle's parameter list.
pub const PARAMETER_LIST_REQUEST_DESC: u8 = 0x01;
/// Number of parameters in the list (i32).
pub const PARAMETER_LIST_SIZE_DESC: u8 = 0x02;

// ============================================================================
// Vehicle mode codes
// ============================================================================

/// Manual (helm) control.
pub const MODE_MANUAL: u8 = 0x00;
/// Autonomous mission execution.
pub const MODE_AUTONOMOUS: u8 = 0x01;

// ============================================================================
// Comms channel codes
// ============================================================================

/// Line-of-sight radio link.
pub const COMMS_CHANNEL_RADIO: u8 = 0x00;
/// Acoustic modem link.
pub const COMMS_CHANNEL_ACOMMS: u8 = 0x01;
/// Iridium satellite link.
pub const COMMS_CHANNEL_IRIDIUM: u8 = 0x02;

// ============================================================================
// Task type codes
// ============================================================================

/// Direct actuator setpoints, no guidance.
pub const TASK_TYPE_PRIMITIVE: u8 = 0x00;
/// Drive to a single waypoint.
pub const TASK_TYPE_WAYPOINT: u8 = 0x01;
/// Follow a sequence of points.
pub const TASK_TYPE_PATH: u8 = 0x02;
/// Survey a zone.
pub const TASK_TYPE_ZONE: u8 = 0x03;

// ============================================================================
// Action command codes
// ============================================================================
// Carried in TASK command fields and per-point commands. The values track
// the ACTION field descriptors above.

/// No action. Sentinel for per-point commands.
pub const ACTION_NO_ACTION: u8 = 0x15;
