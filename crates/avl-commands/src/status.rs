//! Vehicle telemetry status decoded from STATUS packets.
//!
//! Status decoding is best-effort: telemetry arrives continuously, and one
//! malformed field should not blank the whole display. Each field is
//! guarded by a presence check and decoded independently; a field that
//! fails to decode is logged, reported as a warning, and left at its
//! default, while every other field still populates.

use avl_packet::{from_bytes, subslice, Packet, PacketError};

use crate::descriptors::*;

/// The comms channel a packet traveled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommsChannel {
    /// Line-of-sight radio link.
    #[default]
    Radio,
    /// Acoustic modem link.
    Acomms,
    /// Iridium satellite link.
    Iridium,
    /// Unrecognized channel code.
    Unknown,
}

impl From<u8> for CommsChannel {
    fn from(code: u8) -> Self {
        match code {
            COMMS_CHANNEL_RADIO => CommsChannel::Radio,
            COMMS_CHANNEL_ACOMMS => CommsChannel::Acomms,
            COMMS_CHANNEL_IRIDIUM => CommsChannel::Iridium,
            _ => CommsChannel::Unknown,
        }
    }
}

/// A field that failed to decode during a best-effort status decode.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusWarning {
    /// Descriptor of the field that failed.
    pub descriptor: u8,
    /// The decode failure.
    pub error: PacketError,
}

/// Decoded vehicle telemetry.
///
/// Numeric fields not present in the packet stay at their NaN sentinel;
/// strings stay `"NONE"`.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleStatus {
    /// Channel the status arrived over.
    pub comms_channel: CommsChannel,
    /// Reporting vehicle's ID.
    pub vehicle_id: u8,
    /// Vehicle mode name.
    pub mode: String,
    /// Operational status name.
    pub operational_status: String,
    /// Micromodem time sync flag.
    pub umodem_synced: bool,
    /// Roll in degrees.
    pub roll: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Yaw in degrees.
    pub yaw: f64,
    /// X velocity.
    pub vx: f64,
    /// Y velocity.
    pub vy: f64,
    /// Z velocity.
    pub vz: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Altitude in meters.
    pub alt: f64,
    /// Depth below surface in meters.
    pub depth: f64,
    /// Height above bottom in meters.
    pub height: f64,
    /// Propeller RPM.
    pub rpm: f64,
    /// Battery voltage.
    pub voltage: f64,
    /// Number of GPS satellites in use.
    pub gps_sats: u8,
    /// Iridium signal strength in bars.
    pub iridium_strength: u8,
    /// Currently executing task number.
    pub current_task: u8,
    /// Total tasks in the mission.
    pub total_tasks: u8,
    /// Percent complete of the current task.
    pub task_percent: f64,
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus {
            comms_channel: CommsChannel::Radio,
            vehicle_id: 0,
            mode: "NONE".to_owned(),
            operational_status: "NONE".to_owned(),
            umodem_synced: false,
            roll: f64::NAN,
            pitch: f64::NAN,
            yaw: f64::NAN,
            vx: f64::NAN,
            vy: f64::NAN,
            vz: f64::NAN,
            lat: f64::NAN,
            lon: f64::NAN,
            alt: f64::NAN,
            depth: f64::NAN,
            height: f64::NAN,
            rpm: f64::NAN,
            voltage: f64::NAN,
            gps_sats: 0,
            iridium_strength: 0,
            current_task: 0,
            total_tasks: 0,
            task_percent: f64::NAN,
        }
    }
}

/// Decode a triple of doubles at offsets 0, 8, 16.
fn decode_triple(data: &[u8]) -> Result<(f64, f64, f64), PacketError> {
    Ok((
        from_bytes(subslice(data, 0, 8)?)?,
        from_bytes(subslice(data, 8, 8)?)?,
        from_bytes(subslice(data, 16, 8)?)?,
    ))
}

impl VehicleStatus {
    /// Best-effort decode of a STATUS packet.
    ///
    /// Never fails: fields that are absent keep their defaults, and fields
    /// that are present but malformed are returned as warnings with the
    /// rest of the status still populated. Callers decide whether an
    /// update with warnings is worth displaying.
    pub fn from_packet(packet: &Packet) -> (VehicleStatus, Vec<StatusWarning>) {
        let mut status = VehicleStatus::default();
        let mut warnings = Vec::new();

        let mut check = |descriptor: u8, result: Result<(), PacketError>| {
            if let Err(error) = result {
                log::warn!(
                    "ignoring malformed STATUS field 0x{descriptor:02X}: {error}"
                );
                warnings.push(StatusWarning { descriptor, error });
            }
        };

        if packet.has_field(COMMS_CHANNEL_DESC) {
            check(
                COMMS_CHANNEL_DESC,
                (|| {
                    let code: u8 = from_bytes(packet.field(COMMS_CHANNEL_DESC)?.data())?;
                    status.comms_channel = code.into();
                    Ok(())
                })(),
            );
        }

        if packet.has_field(VEHICLE_ID_DESC) {
            check(
                VEHICLE_ID_DESC,
                (|| {
                    status.vehicle_id = from_bytes(packet.field(VEHICLE_ID_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_MODE_DESC) {
            if let Ok(field) = packet.field(STATUS_MODE_DESC) {
                status.mode = String::from_utf8_lossy(field.data()).into_owned();
            }
        }

        if packet.has_field(STATUS_OPERATIONAL_STATUS_DESC) {
            if let Ok(field) = packet.field(STATUS_OPERATIONAL_STATUS_DESC) {
                status.operational_status = String::from_utf8_lossy(field.data()).into_owned();
            }
        }

        if packet.has_field(STATUS_UMODEM_SYNCED_DESC) {
            check(
                STATUS_UMODEM_SYNCED_DESC,
                (|| {
                    status.umodem_synced =
                        from_bytes(packet.field(STATUS_UMODEM_SYNCED_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_ATTITUDE_DESC) {
            check(
                STATUS_ATTITUDE_DESC,
                (|| {
                    let (roll, pitch, yaw) =
                        decode_triple(packet.field(STATUS_ATTITUDE_DESC)?.data())?;
                    status.roll = roll;
                    status.pitch = pitch;
                    status.yaw = yaw;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_VELOCITY_DESC) {
            check(
                STATUS_VELOCITY_DESC,
                (|| {
                    let (vx, vy, vz) = decode_triple(packet.field(STATUS_VELOCITY_DESC)?.data())?;
                    status.vx = vx;
                    status.vy = vy;
                    status.vz = vz;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_POSITION_DESC) {
            check(
                STATUS_POSITION_DESC,
                (|| {
                    let (lat, lon, alt) = decode_triple(packet.field(STATUS_POSITION_DESC)?.data())?;
                    status.lat = lat;
                    status.lon = lon;
                    status.alt = alt;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_DEPTH_DESC) {
            check(
                STATUS_DEPTH_DESC,
                (|| {
                    status.depth = from_bytes(packet.field(STATUS_DEPTH_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_HEIGHT_DESC) {
            check(
                STATUS_HEIGHT_DESC,
                (|| {
                    status.height = from_bytes(packet.field(STATUS_HEIGHT_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_RPM_DESC) {
            check(
                STATUS_RPM_DESC,
                (|| {
                    status.rpm = from_bytes(packet.field(STATUS_RPM_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_VOLTAGE_DESC) {
            check(
                STATUS_VOLTAGE_DESC,
                (|| {
                    status.voltage = from_bytes(packet.field(STATUS_VOLTAGE_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_GPS_SATS_DESC) {
            check(
                STATUS_GPS_SATS_DESC,
                (|| {
                    status.gps_sats = from_bytes(packet.field(STATUS_GPS_SATS_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_IRIDIUM_STRENGTH_DESC) {
            check(
                STATUS_IRIDIUM_STRENGTH_DESC,
                (|| {
                    status.iridium_strength =
                        from_bytes(packet.field(STATUS_IRIDIUM_STRENGTH_DESC)?.data())?;
                    Ok(())
                })(),
            );
        }

        if packet.has_field(STATUS_TASK_DESC) {
            check(
                STATUS_TASK_DESC,
                (|| {
                    let data = packet.field(STATUS_TASK_DESC)?.data();
                    status.current_task = from_bytes(subslice(data, 0, 1)?)?;
                    status.total_tasks = from_bytes(subslice(data, 1, 1)?)?;
                    status.task_percent = from_bytes(subslice(data, 2, 8)?)?;
                    Ok(())
                })(),
            );
        }

        (status, warnings)
    }
}
