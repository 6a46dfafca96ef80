//! An ordered list of tasks and its MISSION packet conversions.

use avl_packet::{Field, Packet};

use crate::builders;
use crate::descriptors::{MISSION_APPEND_DESC, TASK_PACKET_DESC};
use crate::error::CommandError;
use crate::task::Task;

/// An ordered list of tasks.
///
/// On the wire a mission travels as a MISSION packet APPEND field whose
/// data is the concatenation of each task's serialized TASK packet. The
/// nested packets are self-delimiting, so no count is carried.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mission {
    tasks: Vec<Task>,
}

impl Mission {
    /// Create an empty mission.
    pub fn new() -> Self {
        Mission::default()
    }

    /// Append a task to the end of the mission.
    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Number of tasks in the mission.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the mission has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove all tasks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// The tasks in mission order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Build the MISSION APPEND field carrying every task.
    pub fn to_append_field(&self) -> Field {
        let packets: Vec<Packet> = self.tasks.iter().map(Task::to_packet).collect();
        builders::mission_append(&packets)
    }

    /// Reconstruct a mission from a MISSION APPEND field.
    ///
    /// The field data is parsed as a packet stream; every nested packet
    /// must be a TASK packet.
    pub fn from_append_field(field: &Field) -> Result<Mission, CommandError> {
        if field.descriptor() != MISSION_APPEND_DESC {
            return Err(CommandError::WrongFieldDescriptor {
                expected: MISSION_APPEND_DESC,
                actual: field.descriptor(),
            });
        }

        let packets = Packet::parse_multiple(field.data())?;
        let mut mission = Mission::new();
        for packet in &packets {
            if packet.descriptor() != TASK_PACKET_DESC {
                return Err(CommandError::WrongPacketType {
                    expected: TASK_PACKET_DESC,
                    actual: packet.descriptor(),
                });
            }
            mission.append(Task::from_packet(packet)?);
        }
        Ok(mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::TASK_TYPE_WAYPOINT;
    use crate::task::{TaskKind, TaskPoint};

    // Every numeric field set: NaN sentinels are not equal to themselves,
    // so whole-mission equality needs fully specified tasks.
    fn waypoint_task(lat: f64, lon: f64) -> Task {
        Task {
            kind: TaskKind::Waypoint,
            duration: 60.0,
            roll: 0.0,
            pitch: 0.0,
            yaw: 180.0,
            vx: 1.0,
            vy: 0.0,
            vz: 0.0,
            depth: 8.0,
            height: 3.0,
            rpm: 700.0,
            dive: true,
            points: vec![TaskPoint {
                lat,
                lon,
                command: crate::descriptors::ACTION_NO_ACTION,
            }],
            command: crate::descriptors::ACTION_NO_ACTION,
        }
    }

    #[test]
    fn round_trip() {
        let mut mission = Mission::new();
        mission.append(waypoint_task(37.2, -80.4));
        mission.append(waypoint_task(37.3, -80.5));

        let field = mission.to_append_field();
        let decoded = Mission::from_append_field(&field).unwrap();
        assert_eq!(decoded, mission);
    }

    #[test]
    fn append_field_holds_nested_task_packets() {
        let mut mission = Mission::new();
        mission.append(waypoint_task(1.0, 2.0));
        mission.append(waypoint_task(3.0, 4.0));

        let field = mission.to_append_field();
        let packets = Packet::parse_multiple(field.data()).unwrap();
        assert_eq!(packets.len(), 2);
        for packet in &packets {
            assert_eq!(packet.descriptor(), TASK_PACKET_DESC);
            assert!(packet.has_field(crate::descriptors::TASK_TYPE_DESC));
        }
        let kind: u8 =
            avl_packet::from_bytes(packets[0].field(crate::descriptors::TASK_TYPE_DESC).unwrap().data())
                .unwrap();
        assert_eq!(kind, TASK_TYPE_WAYPOINT);
    }

    #[test]
    fn empty_mission_is_empty_field() {
        let mission = Mission::new();
        let field = mission.to_append_field();
        assert!(field.data().is_empty());
        assert_eq!(Mission::from_append_field(&field).unwrap(), mission);
    }

    #[test]
    fn rejects_non_task_sub_packet() {
        let packets = vec![builders::status_packet()];
        let field = builders::mission_append(&packets);
        assert!(matches!(
            Mission::from_append_field(&field),
            Err(CommandError::WrongPacketType { .. })
        ));
    }

    #[test]
    fn rejects_wrong_field_descriptor() {
        let field = builders::mission_start();
        assert!(Mission::from_append_field(&field).is_err());
    }
}
