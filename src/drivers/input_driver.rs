use std::io;
use std::time::Duration;

use crossterm::event::Event;

/// Abstraction over an input source so the event loop can be driven by a
/// real terminal or by a scripted test double.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    struct Scripted(Vec<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.0
                .pop()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut driver = Scripted(vec![Event::Key(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
        ))]);
        let mut by_ref: &mut Scripted = &mut driver;
        assert!(by_ref.poll(Duration::from_millis(0)).unwrap());
        let Event::Key(key) = by_ref.read().unwrap() else {
            panic!("expected key");
        };
        assert_eq!(key.code, KeyCode::Char('x'));
        assert!(by_ref.set_mouse_capture(true).is_ok());
    }
}
