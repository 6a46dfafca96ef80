//! Packet and field builder functions.
//!
//! One pure function per packet type and per semantic field. Packet
//! constructors return an empty [`Packet`] stamped with the right
//! descriptor; field builders turn typed arguments into a [`Field`] with
//! the correct descriptor and byte-encoded payload. Routing metadata
//! ([`comms_channel`], [`vehicle_id`]) is appended by the transport layer
//! after the semantic fields.

use avl_packet::{to_bytes, Field, Packet};

use crate::descriptors::*;

// ============================================================================
// Packet constructors
// ============================================================================

/// Create an empty RESPONSE packet.
pub fn response_packet() -> Packet {
    Packet::new(RESPONSE_PACKET_DESC)
}

/// Create an empty STATUS packet.
pub fn status_packet() -> Packet {
    Packet::new(STATUS_PACKET_DESC)
}

/// Create an empty ACTION packet.
pub fn action_packet() -> Packet {
    Packet::new(ACTION_PACKET_DESC)
}

/// Create an empty HELM packet.
pub fn helm_packet() -> Packet {
    Packet::new(HELM_PACKET_DESC)
}

/// Create an empty ACOUSTIC_PING packet.
pub fn acoustic_ping_packet() -> Packet {
    Packet::new(ACOUSTIC_PING_PACKET_DESC)
}

/// Create an empty MISSION packet.
pub fn mission_packet() -> Packet {
    Packet::new(MISSION_PACKET_DESC)
}

/// Create an empty TASK packet.
pub fn task_packet() -> Packet {
    Packet::new(TASK_PACKET_DESC)
}

/// Create an empty PARAMETER packet.
pub fn parameter_packet() -> Packet {
    Packet::new(PARAMETER_PACKET_DESC)
}

/// Create an empty PARAMETER_LIST packet.
pub fn parameter_list_packet() -> Packet {
    Packet::new(PARAMETER_LIST_PACKET_DESC)
}

// ============================================================================
// Global fields
// ============================================================================

/// COMMS_CHANNEL routing field.
pub fn comms_channel(channel: u8) -> Field {
    Field::with_data(COMMS_CHANNEL_DESC, vec![channel])
}

/// VEHICLE_ID routing field.
pub fn vehicle_id(id: u8) -> Field {
    Field::with_data(VEHICLE_ID_DESC, vec![id])
}

// ============================================================================
// RESPONSE fields
// ============================================================================

/// Descriptor of the packet being responded to.
pub fn response_packet_descriptor(packet_descriptor: u8) -> Field {
    Field::with_data(RESPONSE_PACKET_DESCRIPTOR_DESC, vec![packet_descriptor])
}

/// Descriptor of the field being responded to.
pub fn response_field_descriptor(field_descriptor: u8) -> Field {
    Field::with_data(RESPONSE_FIELD_DESCRIPTOR_DESC, vec![field_descriptor])
}

/// Response payload bytes. For list reads this is itself a serialized
/// packet stream.
pub fn response_data(data: Vec<u8>) -> Field {
    Field::with_data(RESPONSE_DATA_DESC, data)
}

// ============================================================================
// STATUS fields
// ============================================================================

/// Vehicle mode name.
pub fn status_mode(mode: &str) -> Field {
    Field::with_data(STATUS_MODE_DESC, mode.as_bytes().to_vec())
}

/// Operational status name.
pub fn status_operational_status(operational_status: &str) -> Field {
    Field::with_data(
        STATUS_OPERATIONAL_STATUS_DESC,
        operational_status.as_bytes().to_vec(),
    )
}

/// Attitude in degrees: roll, pitch, yaw.
pub fn status_attitude(roll: f64, pitch: f64, yaw: f64) -> Field {
    Field::with_data(STATUS_ATTITUDE_DESC, triple(roll, pitch, yaw))
}

/// Velocity components: vx, vy, vz.
pub fn status_velocity(vx: f64, vy: f64, vz: f64) -> Field {
    Field::with_data(STATUS_VELOCITY_DESC, triple(vx, vy, vz))
}

/// Position: latitude, longitude, altitude.
pub fn status_position(lat: f64, lon: f64, alt: f64) -> Field {
    Field::with_data(STATUS_POSITION_DESC, triple(lat, lon, alt))
}

/// Depth below surface in meters.
pub fn status_depth(depth: f64) -> Field {
    Field::with_data(STATUS_DEPTH_DESC, to_bytes(depth))
}

/// Height above bottom in meters.
pub fn status_height(height: f64) -> Field {
    Field::with_data(STATUS_HEIGHT_DESC, to_bytes(height))
}

/// Propeller RPM.
pub fn status_rpm(rpm: f64) -> Field {
    Field::with_data(STATUS_RPM_DESC, to_bytes(rpm))
}

/// Battery voltage.
pub fn status_voltage(voltage: f64) -> Field {
    Field::with_data(STATUS_VOLTAGE_DESC, to_bytes(voltage))
}

/// Magnetic flux components: mx, my, mz.
pub fn status_mag_flux(mx: f64, my: f64, mz: f64) -> Field {
    Field::with_data(STATUS_MAG_FLUX_DESC, triple(mx, my, mz))
}

/// Micromodem time sync flag.
pub fn status_umodem_synced(synced: bool) -> Field {
    Field::with_data(STATUS_UMODEM_SYNCED_DESC, to_bytes(synced))
}

/// Number of GPS satellites in use.
pub fn status_gps_sats(num_sats: u8) -> Field {
    Field::with_data(STATUS_GPS_SATS_DESC, vec![num_sats])
}

/// Iridium signal strength in bars.
pub fn status_iridium_strength(strength: u8) -> Field {
    Field::with_data(STATUS_IRIDIUM_STRENGTH_DESC, vec![strength])
}

/// Mission progress: current task number, total tasks, percent complete.
pub fn status_task(current: u8, total: u8, percent: f64) -> Field {
    let mut payload = vec![current, total];
    payload.extend(to_bytes(percent));
    Field::with_data(STATUS_TASK_DESC, payload)
}

// ============================================================================
// ACTION fields
// ============================================================================

/// Connectivity check.
pub fn action_ping() -> Field {
    Field::new(ACTION_PING_DESC)
}

/// Immediately stop all actuation.
pub fn action_emergency_stop() -> Field {
    Field::new(ACTION_EMERGENCY_STOP_DESC)
}

/// Power cycle the vehicle computer.
pub fn action_power_cycle() -> Field {
    Field::new(ACTION_POWER_CYCLE_DESC)
}

/// Restart the onboard software stack.
pub fn action_restart_ros() -> Field {
    Field::new(ACTION_RESTART_ROS_DESC)
}

/// Reset the safety system.
pub fn action_reset_safety() -> Field {
    Field::new(ACTION_RESET_SAFETY_DESC)
}

/// Set the vehicle mode by name.
pub fn action_set_mode(mode: &str) -> Field {
    Field::with_data(ACTION_SET_MODE_DESC, mode.as_bytes().to_vec())
}

/// Enable or disable magnetometer streaming.
pub fn action_set_mag_stream(enable: bool) -> Field {
    Field::with_data(ACTION_SET_MAG_STREAM_DESC, to_bytes(enable))
}

/// Magnetometer calibration: the 9 row-major elements of the soft iron
/// matrix followed by the 3 elements of the hard iron vector.
pub fn action_set_mag_cal(a: &[f64; 9], b: &[f64; 3]) -> Field {
    let mut payload = Vec::with_capacity(12 * 8);
    for value in a.iter().chain(b.iter()) {
        payload.extend(to_bytes(*value));
    }
    Field::with_data(ACTION_SET_MAG_CAL_DESC, payload)
}

/// Zero the pressure sensor.
pub fn action_tare_pressure() -> Field {
    Field::new(ACTION_TARE_PRESSURE_DESC)
}

/// Start long-baseline acoustic pings.
pub fn action_start_lbl_pings() -> Field {
    Field::new(ACTION_START_LBL_PINGS_DESC)
}

/// Start one-way travel-time pings.
pub fn action_start_owtt_pings() -> Field {
    Field::new(ACTION_START_OWTT_PINGS_DESC)
}

/// Stop all acoustic pings.
pub fn action_stop_acoustic_pings() -> Field {
    Field::new(ACTION_STOP_ACOUSTIC_PINGS_DESC)
}

/// Hand control to the back seat driver.
pub fn action_enable_back_seat_driver() -> Field {
    Field::new(ACTION_ENABLE_BACK_SEAT_DRIVER_DESC)
}

/// Take control from the back seat driver.
pub fn action_disable_back_seat_driver() -> Field {
    Field::new(ACTION_DISABLE_BACK_SEAT_DRIVER_DESC)
}

/// Geofence polygon vertices. Latitudes and longitudes are interleaved
/// on the wire: lat0, lon0, lat1, lon1, ...
pub fn action_set_geofence(lats: &[f64], lons: &[f64]) -> Field {
    debug_assert_eq!(lats.len(), lons.len());
    let mut payload = Vec::with_capacity(lats.len() * 16);
    for (lat, lon) in lats.iter().zip(lons) {
        payload.extend(to_bytes(*lat));
        payload.extend(to_bytes(*lon));
    }
    Field::with_data(ACTION_SET_GEOFENCE_DESC, payload)
}

/// Turn the strobe light on.
pub fn action_enable_strobe() -> Field {
    Field::new(ACTION_ENABLE_STROBE_DESC)
}

/// Turn the strobe light off.
pub fn action_disable_strobe() -> Field {
    Field::new(ACTION_DISABLE_STROBE_DESC)
}

/// Power the sonar on.
pub fn action_enable_sonar() -> Field {
    Field::new(ACTION_ENABLE_SONAR_DESC)
}

/// Power the sonar off.
pub fn action_disable_sonar() -> Field {
    Field::new(ACTION_DISABLE_SONAR_DESC)
}

/// Start recording sonar data.
pub fn action_start_sonar_recording() -> Field {
    Field::new(ACTION_START_SONAR_RECORDING_DESC)
}

/// Stop recording sonar data.
pub fn action_stop_sonar_recording() -> Field {
    Field::new(ACTION_STOP_SONAR_RECORDING_DESC)
}

// ============================================================================
// MISSION fields
// ============================================================================

/// Start executing the loaded mission.
pub fn mission_start() -> Field {
    Field::new(MISSION_START_DESC)
}

/// Stop mission execution.
pub fn mission_stop() -> Field {
    Field::new(MISSION_STOP_DESC)
}

/// Clear the loaded mission.
pub fn mission_clear() -> Field {
    Field::new(MISSION_CLEAR_DESC)
}

/// Advance to the next task.
pub fn mission_advance() -> Field {
    Field::new(MISSION_ADVANCE_DESC)
}

/// Replace the current task with one serialized TASK packet.
pub fn mission_set(task: &Packet) -> Field {
    Field::with_data(MISSION_SET_DESC, task.to_bytes())
}

/// Append tasks to the mission. The payload is the concatenation of the
/// serialized TASK packets with no count; each nested packet's own length
/// field delimits it on decode.
pub fn mission_append(tasks: &[Packet]) -> Field {
    let mut payload = Vec::new();
    for task in tasks {
        payload.extend(task.to_bytes());
    }
    Field::with_data(MISSION_APPEND_DESC, payload)
}

/// Request the currently executing task.
pub fn mission_read_current() -> Field {
    Field::new(MISSION_READ_CURRENT_DESC)
}

/// Request the entire loaded mission.
pub fn mission_read_all() -> Field {
    Field::new(MISSION_READ_ALL_DESC)
}

// ============================================================================
// TASK fields
// ============================================================================

/// Task duration in seconds.
pub fn task_duration(duration: f64) -> Field {
    Field::with_data(TASK_DURATION_DESC, to_bytes(duration))
}

/// Task type code.
pub fn task_type(kind: u8) -> Field {
    Field::with_data(TASK_TYPE_DESC, vec![kind])
}

/// Commanded attitude in degrees: roll, pitch, yaw.
pub fn task_attitude(roll: f64, pitch: f64, yaw: f64) -> Field {
    Field::with_data(TASK_ATTITUDE_DESC, triple(roll, pitch, yaw))
}

/// Commanded velocity components: vx, vy, vz.
pub fn task_velocity(vx: f64, vy: f64, vz: f64) -> Field {
    Field::with_data(TASK_VELOCITY_DESC, triple(vx, vy, vz))
}

/// Commanded depth in meters.
pub fn task_depth(depth: f64) -> Field {
    Field::with_data(TASK_DEPTH_DESC, to_bytes(depth))
}

/// Commanded height above bottom in meters.
pub fn task_height(height: f64) -> Field {
    Field::with_data(TASK_HEIGHT_DESC, to_bytes(height))
}

/// Commanded propeller RPM.
pub fn task_rpm(rpm: f64) -> Field {
    Field::with_data(TASK_RPM_DESC, to_bytes(rpm))
}

/// Dive flag.
pub fn task_dive(dive: bool) -> Field {
    Field::with_data(TASK_DIVE_DESC, to_bytes(dive))
}

/// Task points as a flat sequence of doubles, 4 per point: lat, lon,
/// placeholder, per-point command.
pub fn task_points(points: &[f64]) -> Field {
    let mut payload = Vec::with_capacity(points.len() * 8);
    for point in points {
        payload.extend(to_bytes(*point));
    }
    Field::with_data(TASK_POINTS_DESC, payload)
}

/// Overall task action command code.
pub fn task_command(command: u8) -> Field {
    Field::with_data(TASK_COMMAND_DESC, vec![command])
}

// ============================================================================
// HELM fields
// ============================================================================

/// Throttle percentage.
pub fn helm_throttle(percent: f64) -> Field {
    Field::with_data(HELM_THROTTLE_DESC, to_bytes(percent))
}

/// Rudder angle in degrees.
pub fn helm_rudder(angle: f64) -> Field {
    Field::with_data(HELM_RUDDER_DESC, to_bytes(angle))
}

/// Elevator angle in degrees.
pub fn helm_elevator(angle: f64) -> Field {
    Field::with_data(HELM_ELEVATOR_DESC, to_bytes(angle))
}

// ============================================================================
// ACOUSTIC_PING fields
// ============================================================================

/// Ping departure time.
pub fn acoustic_ping_departure_time(t: f64) -> Field {
    Field::with_data(ACOUSTIC_PING_DEPARTURE_TIME_DESC, to_bytes(t))
}

/// Ping origin position: latitude, longitude, altitude.
pub fn acoustic_ping_origin_position(lat: f64, lon: f64, alt: f64) -> Field {
    Field::with_data(ACOUSTIC_PING_ORIGIN_POSITION_DESC, triple(lat, lon, alt))
}

// ============================================================================
// PARAMETER fields
// ============================================================================

/// Parameter name.
pub fn parameter_name(name: &str) -> Field {
    Field::with_data(PARAMETER_NAME_DESC, name.as_bytes().to_vec())
}

/// Parameter type name ("bool", "int", "double", "string").
pub fn parameter_type(type_name: &str) -> Field {
    Field::with_data(PARAMETER_TYPE_DESC, type_name.as_bytes().to_vec())
}

/// Parameter value bytes, typed per the companion type field. See
/// [`ParamValue`](crate::ParamValue) for the tagged encode/decode.
pub fn parameter_value(data: Vec<u8>) -> Field {
    Field::with_data(PARAMETER_VALUE_DESC, data)
}

// ============================================================================
// PARAMETER_LIST fields
// ============================================================================

/// Serialized PARAMETER packets, back to back.
pub fn parameter_list(parameters: &[Packet]) -> Field {
    let mut payload = Vec::new();
    for parameter in parameters {
        payload.extend(parameter.to_bytes());
    }
    Field::with_data(PARAMETER_LIST_DESC, payload)
}

/// Request the vehicle's parameter list.
pub fn parameter_list_request() -> Field {
    Field::new(PARAMETER_LIST_REQUEST_DESC)
}

/// Number of parameters in the list.
pub fn parameter_list_size(size: i32) -> Field {
    Field::with_data(PARAMETER_LIST_SIZE_DESC, to_bytes(size))
}

/// Three doubles concatenated in argument order.
fn triple(a: f64, b: f64, c: f64) -> Vec<u8> {
    let mut payload = Vec::with_capacity(24);
    payload.extend(to_bytes(a));
    payload.extend(to_bytes(b));
    payload.extend(to_bytes(c));
    payload
}
