//! End-to-end scenarios exercising the command catalog over the wire.
//!
//! Each test builds packets the way a ground station would, serializes
//! them, and decodes them back the way the vehicle side would.

use avl_commands::descriptors::*;
use avl_commands::{
    builders, Mission, ParamValue, Parameter, ParameterList, Task, TaskKind, TaskPoint,
    VehicleStatus,
};
use avl_packet::{Packet, PacketAssembler};

#[test]
fn test_emergency_stop_over_the_wire() {
    let mut packet = builders::action_packet();
    packet.add_field(builders::action_emergency_stop());
    packet.add_field(builders::vehicle_id(7));
    packet.add_field(builders::comms_channel(COMMS_CHANNEL_RADIO));

    let decoded = Packet::from_bytes(&packet.to_bytes()).unwrap();
    assert_eq!(decoded.descriptor(), ACTION_PACKET_DESC);
    assert_eq!(decoded.num_fields(), 3);
    assert!(decoded.has_field(ACTION_EMERGENCY_STOP_DESC));

    let id: u8 = avl_packet::from_bytes(decoded.field(VEHICLE_ID_DESC).unwrap().data()).unwrap();
    assert_eq!(id, 7);
    let channel: u8 =
        avl_packet::from_bytes(decoded.field(COMMS_CHANNEL_DESC).unwrap().data()).unwrap();
    assert_eq!(channel, COMMS_CHANNEL_RADIO);
}

#[test]
fn test_geofence_points_interleave() {
    let lats = [37.0, 37.1, 37.2];
    let lons = [-80.0, -80.1, -80.2];
    let field = builders::action_set_geofence(&lats, &lons);

    let values: Vec<f64> = avl_packet::vector_from_bytes(field.data()).unwrap();
    assert_eq!(
        values,
        vec![37.0, -80.0, 37.1, -80.1, 37.2, -80.2]
    );
}

#[test]
fn test_nested_mission_round_trip() {
    let mut survey = Task::default();
    survey.kind = TaskKind::Path;
    survey.depth = 5.0;
    survey.rpm = 600.0;
    survey.points.push(TaskPoint {
        lat: 37.2,
        lon: -80.4,
        command: ACTION_NO_ACTION,
    });
    survey.points.push(TaskPoint {
        lat: 37.3,
        lon: -80.5,
        command: ACTION_NO_ACTION,
    });

    let mut surface = Task::default();
    surface.kind = TaskKind::Primitive;
    surface.depth = 0.0;
    surface.duration = 30.0;

    let mut mission = Mission::new();
    mission.append(survey);
    mission.append(surface);

    let mut packet = builders::mission_packet();
    packet.add_field(mission.to_append_field());
    packet.add_field(builders::vehicle_id(2));

    // Vehicle side: parse the outer packet, then the tasks nested in the
    // append field's data.
    let received = Packet::from_bytes(&packet.to_bytes()).unwrap();
    let append = received.field(MISSION_APPEND_DESC).unwrap();
    let task_packets = Packet::parse_multiple(append.data()).unwrap();
    assert_eq!(task_packets.len(), 2);
    assert!(task_packets
        .iter()
        .all(|p| p.descriptor() == TASK_PACKET_DESC));

    let decoded = Mission::from_append_field(append).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.tasks()[0].kind, TaskKind::Path);
    assert_eq!(decoded.tasks()[0].points.len(), 2);
    assert_eq!(decoded.tasks()[0].points[1].lat, 37.3);
    assert_eq!(decoded.tasks()[1].duration, 30.0);
    assert!(decoded.tasks()[1].height.is_nan());
}

#[test]
fn test_parameter_list_round_trip() {
    let mut list = ParameterList::new();
    list.append(Parameter::new("nav/max_depth", ParamValue::Double(30.0)));
    list.append(Parameter::new("comms/retries", ParamValue::Int(3)));
    list.append(Parameter::new("safety/enabled", ParamValue::Bool(true)));
    list.append(Parameter::new(
        "vehicle/name",
        ParamValue::String("auv-690".to_owned()),
    ));

    let packet = Packet::from_bytes(&list.to_packet().to_bytes()).unwrap();
    let decoded = ParameterList::from_packet(&packet).unwrap();
    assert_eq!(decoded.len(), 4);
    assert_eq!(decoded.parameters()[0].name, "nav/max_depth");
    assert_eq!(decoded.parameters()[1].value, ParamValue::Int(3));
    assert_eq!(decoded.parameters()[3].value.type_name(), "string");
}

#[test]
fn test_status_stream_with_line_noise() {
    let mut status_packet = builders::status_packet();
    status_packet.add_field(builders::status_depth(11.5));
    status_packet.add_field(builders::status_position(37.2, -80.4, 610.0));
    status_packet.add_field(builders::vehicle_id(1));

    let mut action_packet = builders::action_packet();
    action_packet.add_field(builders::action_ping());

    // Serial line with garbage before and between packets.
    let mut assembler = PacketAssembler::new();
    assembler.push(&[0x00, 0x13, 0x37]);
    assembler.push(&status_packet.to_bytes());
    assembler.push(&[0x42]);
    assembler.push(&action_packet.to_bytes());

    let first = assembler.next_packet().unwrap().unwrap();
    assert_eq!(first.descriptor(), STATUS_PACKET_DESC);
    let (status, warnings) = VehicleStatus::from_packet(&first);
    assert!(warnings.is_empty());
    assert_eq!(status.depth, 11.5);
    assert_eq!(status.lat, 37.2);
    assert_eq!(status.vehicle_id, 1);

    let second = assembler.next_packet().unwrap().unwrap();
    assert_eq!(second.descriptor(), ACTION_PACKET_DESC);
    assert!(assembler.next_packet().unwrap().is_none());
}

#[test]
fn test_helm_setpoints() {
    let mut packet = builders::helm_packet();
    packet.add_field(builders::helm_throttle(40.0));
    packet.add_field(builders::helm_rudder(-10.0));
    packet.add_field(builders::helm_elevator(5.0));

    let decoded = Packet::from_bytes(&packet.to_bytes()).unwrap();
    assert_eq!(decoded.descriptor(), HELM_PACKET_DESC);
    let rudder: f64 =
        avl_packet::from_bytes(decoded.field(HELM_RUDDER_DESC).unwrap().data()).unwrap();
    assert_eq!(rudder, -10.0);
}

#[test]
fn test_sparse_task_keeps_sentinels() {
    let mut packet = builders::task_packet();
    packet.add_field(builders::task_type(TASK_TYPE_PRIMITIVE));
    packet.add_field(builders::task_depth(3.0));

    let task = Task::from_packet(&Packet::from_bytes(&packet.to_bytes()).unwrap()).unwrap();
    assert_eq!(task.kind, TaskKind::Primitive);
    assert_eq!(task.depth, 3.0);
    assert!(task.duration.is_nan());
    assert!(task.rpm.is_nan());
    assert!(task.points.is_empty());
    assert_eq!(task.command, ACTION_NO_ACTION);
}
