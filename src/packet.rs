use bytes::BytesMut;

/// RakNet marker shared by all offline (connectionless) messages.
pub(crate) const OFFLINE_MESSAGE_MAGIC: [u8; 16] = [
    0x00, 0xFF, 0xFF, 0x00, 0xFE, 0xFE, 0xFE, 0xFE, 0xFD, 0xFD, 0xFD, 0xFD, 0x12, 0x34, 0x56,
    0x78,
];

/// The unconnected-ping probe: message id, client timestamp, offline-message
/// magic, client GUID. Identical for every call, never assembled at runtime.
pub(crate) const UNCONNECTED_PING: [u8; 33] = [
    0x01, // unconnected ping
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xC1, 0x1D, // client timestamp
    0x00, 0xFF, 0xFF, 0x00, 0xFE, 0xFE, 0xFE, 0xFE, 0xFD, 0xFD, 0xFD, 0xFD, 0x12, 0x34, 0x56,
    0x78, // offline-message magic
    0x9C, 0x18, 0x28, 0x7F, 0xE1, 0x64, 0x89, 0x8D, // client GUID
];

/// Fixed unconnected-pong header: id, timestamp echo, server GUID,
/// offline-message magic and the status string's length prefix. Everything
/// after it is the MOTD.
pub(crate) const PONG_HEADER_LEN: usize = 35;

pub(crate) const RECV_BUFFER_LEN: usize = 1024;

/// Splits the MOTD out of a pong datagram, or `None` when the datagram is too
/// short to carry one. The header fields are not inspected: a reply that is
/// long enough is trusted to have the fixed layout.
pub(crate) fn extract_motd(mut reply: BytesMut) -> Option<String> {
    if reply.len() <= PONG_HEADER_LEN {
        return None;
    }
    let motd = reply.split_off(PONG_HEADER_LEN);
    Some(String::from_utf8_lossy(&motd).into_owned())
}

/// Builds an unconnected-pong datagram the way a real server would, for
/// loopback mock servers in tests.
#[cfg(test)]
pub(crate) fn pong_reply(motd: &[u8]) -> Vec<u8> {
    use byteorder::{BigEndian, WriteBytesExt};

    let mut buf = Vec::with_capacity(PONG_HEADER_LEN + motd.len());
    buf.write_u8(0x1C).unwrap(); // unconnected pong
    buf.write_i64::<BigEndian>(0x0000_0000_FFFF_C11D).unwrap(); // timestamp echo
    buf.write_i64::<BigEndian>(0x2A2A_2A2A_2A2A_2A2A).unwrap(); // server GUID
    buf.extend_from_slice(&OFFLINE_MESSAGE_MAGIC);
    buf.write_u16::<BigEndian>(motd.len() as u16).unwrap();
    buf.extend_from_slice(motd);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ReadBytesExt};
    use pretty_assertions::assert_eq;

    #[test]
    fn ping_is_the_fixed_wire_sequence() {
        let expected: &[u8] = &[
            0x01, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xC1, 0x1D, 0x00, 0xFF, 0xFF, 0x00, 0xFE,
            0xFE, 0xFE, 0xFE, 0xFD, 0xFD, 0xFD, 0xFD, 0x12, 0x34, 0x56, 0x78, 0x9C, 0x18, 0x28,
            0x7F, 0xE1, 0x64, 0x89, 0x8D,
        ];
        assert_eq!(&UNCONNECTED_PING[..], expected);
    }

    #[test]
    fn ping_field_layout() {
        assert_eq!(UNCONNECTED_PING[0], 0x01);

        let mut rdr = &UNCONNECTED_PING[1..9];
        assert_eq!(rdr.read_i64::<BigEndian>().unwrap(), 0x0000_0000_FFFF_C11D);

        assert_eq!(UNCONNECTED_PING[9..25], OFFLINE_MESSAGE_MAGIC);

        let mut rdr = &UNCONNECTED_PING[25..33];
        assert_eq!(
            rdr.read_u64::<BigEndian>().unwrap(),
            0x9C18_287F_E164_898D
        );
    }

    #[test]
    fn motd_is_everything_past_the_header() {
        let reply = pong_reply(b"MCPE;A server;589;1.20.62;3;10");
        assert_eq!(reply.len(), PONG_HEADER_LEN + 30);

        let motd = extract_motd(BytesMut::from(&reply[..])).unwrap();
        assert_eq!(motd, "MCPE;A server;589;1.20.62;3;10");
    }

    #[test]
    fn header_sized_reply_has_no_motd() {
        let reply = pong_reply(b"");
        assert_eq!(reply.len(), PONG_HEADER_LEN);
        assert!(extract_motd(BytesMut::from(&reply[..])).is_none());

        assert!(extract_motd(BytesMut::new()).is_none());
        assert!(extract_motd(BytesMut::from(&[0x1C][..])).is_none());
    }

    #[test]
    fn motd_survives_non_utf8_bytes() {
        let mut raw = pong_reply(b"MCPE;ok");
        raw.push(0xFF);
        let motd = extract_motd(BytesMut::from(&raw[..])).unwrap();
        assert!(motd.starts_with("MCPE;ok"));
    }
}
