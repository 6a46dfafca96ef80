//! Mission task records and their TASK packet conversions.

use avl_packet::{from_bytes, subslice, vector_from_bytes, Packet, PacketError};

use crate::builders;
use crate::descriptors::*;
use crate::error::CommandError;

/// Task type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskKind {
    /// Direct actuator setpoints, no guidance.
    #[default]
    Primitive,
    /// Drive to a single waypoint.
    Waypoint,
    /// Follow a sequence of points.
    Path,
    /// Survey a zone.
    Zone,
}

impl TryFrom<u8> for TaskKind {
    type Error = CommandError;

    fn try_from(code: u8) -> Result<Self, CommandError> {
        match code {
            TASK_TYPE_PRIMITIVE => Ok(TaskKind::Primitive),
            TASK_TYPE_WAYPOINT => Ok(TaskKind::Waypoint),
            TASK_TYPE_PATH => Ok(TaskKind::Path),
            TASK_TYPE_ZONE => Ok(TaskKind::Zone),
            other => Err(CommandError::UnknownTaskType(other)),
        }
    }
}

impl From<TaskKind> for u8 {
    fn from(kind: TaskKind) -> u8 {
        match kind {
            TaskKind::Primitive => TASK_TYPE_PRIMITIVE,
            TaskKind::Waypoint => TASK_TYPE_WAYPOINT,
            TaskKind::Path => TASK_TYPE_PATH,
            TaskKind::Zone => TASK_TYPE_ZONE,
        }
    }
}

/// A task point: a position and an action command to run there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Action command code to execute at the point.
    pub command: u8,
}

/// A mission task.
///
/// Numeric fields use NaN as the "unset" sentinel; a TASK packet carries
/// only the fields that are set, and decoding leaves missing fields at
/// their sentinel. Old and new field sets interoperate this way.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Duration in seconds.
    pub duration: f64,
    /// Task type.
    pub kind: TaskKind,
    /// Commanded roll in degrees.
    pub roll: f64,
    /// Commanded pitch in degrees.
    pub pitch: f64,
    /// Commanded yaw in degrees.
    pub yaw: f64,
    /// Commanded x velocity.
    pub vx: f64,
    /// Commanded y velocity.
    pub vy: f64,
    /// Commanded z velocity.
    pub vz: f64,
    /// Commanded depth in meters.
    pub depth: f64,
    /// Commanded height above bottom in meters.
    pub height: f64,
    /// Commanded propeller RPM.
    pub rpm: f64,
    /// Whether the task is a dive.
    pub dive: bool,
    /// Ordered task points with per-point commands.
    pub points: Vec<TaskPoint>,
    /// Overall action command code.
    pub command: u8,
}

impl Default for Task {
    fn default() -> Self {
        Task {
            duration: f64::NAN,
            kind: TaskKind::Primitive,
            roll: f64::NAN,
            pitch: f64::NAN,
            yaw: f64::NAN,
            vx: f64::NAN,
            vy: f64::NAN,
            vz: f64::NAN,
            depth: f64::NAN,
            height: f64::NAN,
            rpm: f64::NAN,
            dive: false,
            points: Vec::new(),
            command: ACTION_NO_ACTION,
        }
    }
}

impl Task {
    /// Build the TASK packet for this task.
    ///
    /// Points are flattened to four doubles each: latitude, longitude, a
    /// NaN placeholder, and the per-point command as a double.
    pub fn to_packet(&self) -> Packet {
        let mut points = Vec::with_capacity(self.points.len() * 4);
        for point in &self.points {
            points.push(point.lat);
            points.push(point.lon);
            points.push(f64::NAN);
            points.push(point.command as f64);
        }

        let mut packet = builders::task_packet();
        packet.add_field(builders::task_duration(self.duration));
        packet.add_field(builders::task_type(self.kind.into()));
        packet.add_field(builders::task_attitude(self.roll, self.pitch, self.yaw));
        packet.add_field(builders::task_velocity(self.vx, self.vy, self.vz));
        packet.add_field(builders::task_depth(self.depth));
        packet.add_field(builders::task_height(self.height));
        packet.add_field(builders::task_rpm(self.rpm));
        packet.add_field(builders::task_dive(self.dive));
        packet.add_field(builders::task_points(&points));
        packet.add_field(builders::task_command(self.command));
        packet
    }

    /// Reconstruct a task from a TASK packet.
    ///
    /// Every field is optional: a missing field leaves the corresponding
    /// attribute at its unset sentinel. A field that is present but
    /// malformed is an error.
    pub fn from_packet(packet: &Packet) -> Result<Task, CommandError> {
        if packet.descriptor() != TASK_PACKET_DESC {
            return Err(CommandError::WrongPacketType {
                expected: TASK_PACKET_DESC,
                actual: packet.descriptor(),
            });
        }

        let mut task = Task::default();

        if packet.has_field(TASK_DURATION_DESC) {
            task.duration = from_bytes(packet.field(TASK_DURATION_DESC)?.data())?;
        }

        if packet.has_field(TASK_TYPE_DESC) {
            let code: u8 = from_bytes(packet.field(TASK_TYPE_DESC)?.data())?;
            task.kind = TaskKind::try_from(code)?;
        }

        if packet.has_field(TASK_ATTITUDE_DESC) {
            let data = packet.field(TASK_ATTITUDE_DESC)?.data();
            task.roll = from_bytes(subslice(data, 0, 8)?)?;
            task.pitch = from_bytes(subslice(data, 8, 8)?)?;
            task.yaw = from_bytes(subslice(data, 16, 8)?)?;
        }

        if packet.has_field(TASK_VELOCITY_DESC) {
            let data = packet.field(TASK_VELOCITY_DESC)?.data();
            task.vx = from_bytes(subslice(data, 0, 8)?)?;
            task.vy = from_bytes(subslice(data, 8, 8)?)?;
            task.vz = from_bytes(subslice(data, 16, 8)?)?;
        }

        if packet.has_field(TASK_DEPTH_DESC) {
            task.depth = from_bytes(packet.field(TASK_DEPTH_DESC)?.data())?;
        }

        if packet.has_field(TASK_HEIGHT_DESC) {
            task.height = from_bytes(packet.field(TASK_HEIGHT_DESC)?.data())?;
        }

        if packet.has_field(TASK_RPM_DESC) {
            task.rpm = from_bytes(packet.field(TASK_RPM_DESC)?.data())?;
        }

        if packet.has_field(TASK_DIVE_DESC) {
            task.dive = from_bytes(packet.field(TASK_DIVE_DESC)?.data())?;
        }

        if packet.has_field(TASK_POINTS_DESC) {
            let values = vector_from_bytes::<f64>(packet.field(TASK_POINTS_DESC)?.data())?;
            if values.len() % 4 != 0 {
                return Err(PacketError::VectorLengthMismatch {
                    len: values.len(),
                    width: 4,
                }
                .into());
            }
            for chunk in values.chunks_exact(4) {
                task.points.push(TaskPoint {
                    lat: chunk[0],
                    lon: chunk[1],
                    command: chunk[3] as u8,
                });
            }
        }

        if packet.has_field(TASK_COMMAND_DESC) {
            task.command = from_bytes(packet.field(TASK_COMMAND_DESC)?.data())?;
        }

        Ok(task)
    }
}
