// arrow keys reach stdin as 3 bytes: 27, 91 and one of 65..=68
use circular_buffer::CircularBuffer;

use crate::coordinates::Direction;

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes in input buffer

const ESCAPE: u8 = 27;
const BRACKET: u8 = 91;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Turn(Direction),
    Start,
    Quit,
}

fn arrow(code: u8) -> Option<Direction> {
    match code {
        65 => Some(Direction::Up),
        66 => Some(Direction::Down),
        67 => Some(Direction::Right),
        68 => Some(Direction::Left),
        _ => None,
    }
}

/// Turns raw terminal bytes into key events. Unknown keys are dropped.
#[derive(Debug, Clone)]
pub struct KeyDecoder {
    buffer: InputBuffer,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    pub fn new() -> Self {
        KeyDecoder {
            buffer: InputBuffer::new(),
        }
    }

    pub fn push(&mut self, key: u8) {
        // if the buffer is full, ignore the input
        if self.buffer.is_full() {
            return;
        }
        self.buffer.push_back(key);
    }

    /// Next complete event, or `None` when the buffer holds no full key press.
    pub fn next_event(&mut self) -> Option<KeyEvent> {
        while let Some(&first) = self.buffer.front() {
            match first {
                ESCAPE => {
                    if self.buffer.len() < 3 {
                        // rest of the sequence has not arrived yet
                        return None;
                    }
                    if self.buffer.nth_front(1) != Some(&BRACKET) {
                        self.buffer.pop_front();
                        continue;
                    }
                    let code = self.buffer.nth_front(2).copied();
                    for _ in 0..3 {
                        self.buffer.pop_front();
                    }
                    if let Some(direction) = code.and_then(arrow) {
                        return Some(KeyEvent::Turn(direction));
                    }
                }
                b'\n' | b'\r' | b' ' => {
                    self.buffer.pop_front();
                    return Some(KeyEvent::Start);
                }
                b'q' => {
                    self.buffer.pop_front();
                    return Some(KeyEvent::Quit);
                }
                _ => {
                    self.buffer.pop_front();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut KeyDecoder, bytes: &[u8]) {
        for byte in bytes {
            decoder.push(*byte);
        }
    }

    #[test]
    fn decodes_arrows() {
        let mut decoder = KeyDecoder::new();
        feed(&mut decoder, &[27, 91, 65, 27, 91, 68]);
        assert_eq!(decoder.next_event(), Some(KeyEvent::Turn(Direction::Up)));
        assert_eq!(decoder.next_event(), Some(KeyEvent::Turn(Direction::Left)));
        assert_eq!(decoder.next_event(), None);
    }

    #[test]
    fn waits_for_incomplete_sequence() {
        let mut decoder = KeyDecoder::new();
        feed(&mut decoder, &[27, 91]);
        assert_eq!(decoder.next_event(), None);
        decoder.push(66);
        assert_eq!(decoder.next_event(), Some(KeyEvent::Turn(Direction::Down)));
    }

    #[test]
    fn ignores_unknown_keys() {
        let mut decoder = KeyDecoder::new();
        feed(&mut decoder, b"xyzA");
        feed(&mut decoder, &[27, 91, 70]);
        assert_eq!(decoder.next_event(), None);
    }

    #[test]
    fn start_and_quit_keys() {
        let mut decoder = KeyDecoder::new();
        feed(&mut decoder, b" \nq");
        assert_eq!(decoder.next_event(), Some(KeyEvent::Start));
        assert_eq!(decoder.next_event(), Some(KeyEvent::Start));
        assert_eq!(decoder.next_event(), Some(KeyEvent::Quit));
    }
}
