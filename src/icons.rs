//! Icon Rendering Capability
//!
//! The dashboard marks icons with placeholders and relies on an icon library
//! to materialize them after each render. The shell only needs the "scan and
//! render" operation, injected here so it can run without a browser.

use std::rc::Rc;

/// Scans the rendered output for icon placeholders and materializes them.
///
/// Implementations must tolerate redundant calls.
pub trait IconRenderer {
    fn render_icons(&self);
}

/// Icon renderer that does nothing, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIcons;

impl IconRenderer for NoopIcons {
    fn render_icons(&self) {}
}

impl<T: IconRenderer + ?Sized> IconRenderer for &T {
    fn render_icons(&self) {
        (**self).render_icons()
    }
}

impl<T: IconRenderer + ?Sized> IconRenderer for Rc<T> {
    fn render_icons(&self) {
        (**self).render_icons()
    }
}

impl<T: IconRenderer + ?Sized> IconRenderer for Box<T> {
    fn render_icons(&self) {
        (**self).render_icons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting(Cell<usize>);

    impl IconRenderer for Counting {
        fn render_icons(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_noop_is_callable_repeatedly() {
        let icons = NoopIcons;
        icons.render_icons();
        icons.render_icons();
    }

    #[test]
    fn test_wrappers_forward() {
        let counting = Rc::new(Counting(Cell::new(0)));
        let boxed: Box<dyn IconRenderer> = Box::new(Rc::clone(&counting));
        boxed.render_icons();
        (&*counting).render_icons();
        assert_eq!(counting.0.get(), 2);
    }
}
