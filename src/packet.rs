//! Framing for datagrams on the punched socket.
//!
//! Every datagram between peers starts with [`MAGIC`] and a tag byte. The
//! peer keeps probing for a while after we consider the path open, and a
//! late STUN answer may still land on the same socket; framing lets the
//! relay drop both instead of forwarding them to the application.

pub const MAGIC: u8 = 0xa5;

const TAG_PROBE: u8 = 0x01;
const TAG_KEEPALIVE: u8 = 0x02;
const TAG_DATA: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet<'a> {
    Probe,
    Keepalive,
    Data(&'a [u8]),
}

impl<'a> Packet<'a> {
    pub fn decode(buf: &'a [u8]) -> Option<Self> {
        match buf {
            [MAGIC, TAG_PROBE, ..] => Some(Packet::Probe),
            [MAGIC, TAG_KEEPALIVE, ..] => Some(Packet::Keepalive),
            [MAGIC, TAG_DATA, payload @ ..] => Some(Packet::Data(payload)),
            _ => None,
        }
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.clear();
        out.push(MAGIC);
        match self {
            Packet::Probe => out.push(TAG_PROBE),
            Packet::Keepalive => out.push(TAG_KEEPALIVE),
            Packet::Data(payload) => {
                out.push(TAG_DATA);
                out.extend_from_slice(payload);
            }
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_keeps_boundaries() {
        let frame = Packet::Data(b"hello").to_vec();
        assert_eq!(frame.len(), 7);
        assert_eq!(Packet::decode(&frame), Some(Packet::Data(b"hello")));

        let empty = Packet::Data(&[]).to_vec();
        assert_eq!(Packet::decode(&empty), Some(Packet::Data(&[])));
    }

    #[test]
    fn test_control_frames() {
        assert_eq!(Packet::decode(&Packet::Probe.to_vec()), Some(Packet::Probe));
        assert_eq!(
            Packet::decode(&Packet::Keepalive.to_vec()),
            Some(Packet::Keepalive)
        );
    }

    #[test]
    fn test_foreign_datagrams() {
        // a STUN response starts with 0x01 0x01
        assert_eq!(Packet::decode(&[0x01, 0x01, 0x00, 0x0c]), None);
        assert_eq!(Packet::decode(&[MAGIC]), None);
        assert_eq!(Packet::decode(&[MAGIC, 0x7f, 1, 2]), None);
        assert_eq!(Packet::decode(&[]), None);
    }

    #[test]
    fn test_encode_reuses_buffer() {
        let mut buf = vec![9; 32];
        Packet::Data(b"ab").encode(&mut buf);
        assert_eq!(buf, vec![MAGIC, TAG_DATA, b'a', b'b']);
    }
}
