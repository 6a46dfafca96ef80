//! Vehicle parameters and their PARAMETER packet conversions.
//!
//! A parameter value is one of a small closed set of types. On the wire
//! the type travels as a name string in the PARAMETER_TYPE field and the
//! value as raw bytes in the PARAMETER_VALUE field; here both sides go
//! through the [`ParamValue`] sum type, so encode and decode are
//! exhaustive matches rather than string comparisons scattered around.

use avl_packet::{from_bytes, to_bytes, Packet};

use crate::builders;
use crate::descriptors::*;
use crate::error::CommandError;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Boolean flag, 1 byte on the wire.
    Bool(bool),
    /// Signed integer, 4 bytes little-endian.
    Int(i32),
    /// Double-precision float, 8 bytes little-endian.
    Double(f64),
    /// String, raw bytes with no terminator.
    String(String),
}

impl ParamValue {
    /// The wire type name carried in the PARAMETER_TYPE field.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) => "int",
            ParamValue::Double(_) => "double",
            ParamValue::String(_) => "string",
        }
    }

    /// Encode the value to its PARAMETER_VALUE field bytes.
    pub fn to_value_bytes(&self) -> Vec<u8> {
        match self {
            ParamValue::Bool(v) => to_bytes(*v),
            ParamValue::Int(v) => to_bytes(*v),
            ParamValue::Double(v) => to_bytes(*v),
            ParamValue::String(v) => v.as_bytes().to_vec(),
        }
    }

    /// Decode a value from its type name and PARAMETER_VALUE field bytes.
    pub fn from_value_bytes(type_name: &str, bytes: &[u8]) -> Result<Self, CommandError> {
        match type_name {
            "bool" => Ok(ParamValue::Bool(from_bytes(bytes)?)),
            "int" => Ok(ParamValue::Int(from_bytes(bytes)?)),
            "double" => Ok(ParamValue::Double(from_bytes(bytes)?)),
            "string" => {
                let value = std::str::from_utf8(bytes)
                    .map_err(|_| CommandError::InvalidUtf8(PARAMETER_VALUE_DESC))?;
                Ok(ParamValue::String(value.to_owned()))
            }
            other => Err(CommandError::UnknownParamType(other.to_owned())),
        }
    }
}

/// A named vehicle parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: ParamValue,
}

impl Parameter {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Parameter {
            name: name.into(),
            value,
        }
    }

    /// Build the PARAMETER packet: NAME, TYPE, and VALUE fields.
    pub fn to_packet(&self) -> Packet {
        let mut packet = builders::parameter_packet();
        packet.add_field(builders::parameter_name(&self.name));
        packet.add_field(builders::parameter_type(self.value.type_name()));
        packet.add_field(builders::parameter_value(self.value.to_value_bytes()));
        packet
    }

    /// Reconstruct a parameter from a PARAMETER packet.
    ///
    /// NAME, TYPE, and VALUE are all required; the value bytes are decoded
    /// per the type tag with strict widths.
    pub fn from_packet(packet: &Packet) -> Result<Parameter, CommandError> {
        if packet.descriptor() != PARAMETER_PACKET_DESC {
            return Err(CommandError::WrongPacketType {
                expected: PARAMETER_PACKET_DESC,
                actual: packet.descriptor(),
            });
        }

        if !packet.has_field(PARAMETER_NAME_DESC) {
            return Err(CommandError::MissingField(PARAMETER_NAME_DESC));
        }
        if !packet.has_field(PARAMETER_TYPE_DESC) {
            return Err(CommandError::MissingField(PARAMETER_TYPE_DESC));
        }
        if !packet.has_field(PARAMETER_VALUE_DESC) {
            return Err(CommandError::MissingField(PARAMETER_VALUE_DESC));
        }

        let name = std::str::from_utf8(packet.field(PARAMETER_NAME_DESC)?.data())
            .map_err(|_| CommandError::InvalidUtf8(PARAMETER_NAME_DESC))?
            .to_owned();
        let type_name = std::str::from_utf8(packet.field(PARAMETER_TYPE_DESC)?.data())
            .map_err(|_| CommandError::InvalidUtf8(PARAMETER_TYPE_DESC))?
            .to_owned();
        let value =
            ParamValue::from_value_bytes(&type_name, packet.field(PARAMETER_VALUE_DESC)?.data())?;

        Ok(Parameter { name, value })
    }
}

/// A vehicle's full parameter set.
///
/// Travels as a PARAMETER_LIST packet whose LIST field concatenates the
/// serialized PARAMETER packets back to back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    /// Create an empty list.
    pub fn new() -> Self {
        ParameterList::default()
    }

    /// Append a parameter.
    pub fn append(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The parameters in list order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Build the PARAMETER_LIST packet carrying every parameter.
    pub fn to_packet(&self) -> Packet {
        let packets: Vec<Packet> = self.parameters.iter().map(Parameter::to_packet).collect();
        let mut packet = builders::parameter_list_packet();
        packet.add_field(builders::parameter_list(&packets));
        packet.add_field(builders::parameter_list_size(self.parameters.len() as i32));
        packet
    }

    /// Reconstruct a parameter list from a PARAMETER_LIST packet.
    pub fn from_packet(packet: &Packet) -> Result<ParameterList, CommandError> {
        if packet.descriptor() != PARAMETER_LIST_PACKET_DESC {
            return Err(CommandError::WrongPacketType {
                expected: PARAMETER_LIST_PACKET_DESC,
                actual: packet.descriptor(),
            });
        }

        let field = packet.field(PARAMETER_LIST_DESC)?;
        let mut list = ParameterList::new();
        for parameter_packet in Packet::parse_multiple(field.data())? {
            list.append(Parameter::from_packet(&parameter_packet)?);
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trips() {
        for value in [
            ParamValue::Bool(true),
            ParamValue::Int(-42),
            ParamValue::Double(3.5),
            ParamValue::String("primary".to_owned()),
        ] {
            let decoded =
                ParamValue::from_value_bytes(value.type_name(), &value.to_value_bytes()).unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let err = ParamValue::from_value_bytes("float", &[0u8; 4]).unwrap_err();
        assert_eq!(err, CommandError::UnknownParamType("float".to_owned()));
    }

    #[test]
    fn value_widths_are_strict() {
        assert!(ParamValue::from_value_bytes("int", &[0u8; 8]).is_err());
        assert!(ParamValue::from_value_bytes("double", &[0u8; 4]).is_err());
    }

    #[test]
    fn parameter_round_trip() {
        let parameter = Parameter::new("nav/max_depth", ParamValue::Double(30.0));
        let decoded = Parameter::from_packet(&parameter.to_packet()).unwrap();
        assert_eq!(decoded, parameter);
    }

    #[test]
    fn parameter_packet_layout() {
        let packet = Parameter::new("safety/enabled", ParamValue::Bool(true)).to_packet();
        assert_eq!(packet.descriptor(), PARAMETER_PACKET_DESC);
        assert_eq!(packet.field(PARAMETER_NAME_DESC).unwrap().data(), b"safety/enabled");
        assert_eq!(packet.field(PARAMETER_TYPE_DESC).unwrap().data(), b"bool");
        assert_eq!(packet.field(PARAMETER_VALUE_DESC).unwrap().data(), &[0x01]);
    }

    #[test]
    fn missing_type_field_is_an_error() {
        let mut packet = builders::parameter_packet();
        packet.add_field(builders::parameter_name("foo"));
        packet.add_field(builders::parameter_value(vec![0x01]));
        assert_eq!(
            Parameter::from_packet(&packet),
            Err(CommandError::MissingField(PARAMETER_TYPE_DESC))
        );
    }

    #[test]
    fn list_round_trip() {
        let mut list = ParameterList::new();
        list.append(Parameter::new("a", ParamValue::Int(1)));
        list.append(Parameter::new("b", ParamValue::String("x".to_owned())));
        list.append(Parameter::new("c", ParamValue::Bool(false)));

        let decoded = ParameterList::from_packet(&list.to_packet()).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn list_packet_carries_size() {
        let mut list = ParameterList::new();
        list.append(Parameter::new("a", ParamValue::Int(1)));
        let packet = list.to_packet();
        let size: i32 =
            from_bytes(packet.field(PARAMETER_LIST_SIZE_DESC).unwrap().data()).unwrap();
        assert_eq!(size, 1);
    }
}
