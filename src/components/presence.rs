use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Mount phase of an overlay that animates out before it disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Hidden,
    Shown,
    Leaving,
}

impl Presence {
    pub fn initial(open: bool) -> Self {
        if open {
            Presence::Shown
        } else {
            Presence::Hidden
        }
    }

    /// Phase after the owner's open flag changes to `open`.
    pub fn next(self, open: bool) -> Self {
        match (self, open) {
            (_, true) => Presence::Shown,
            (Presence::Hidden, false) => Presence::Hidden,
            (Presence::Shown | Presence::Leaving, false) => Presence::Leaving,
        }
    }

    /// Phase once the exit animation has run.
    pub fn settle(self) -> Self {
        match self {
            Presence::Leaving => Presence::Hidden,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Presence::Hidden
    }

    pub fn class(self) -> &'static str {
        match self {
            Presence::Leaving => "leaving",
            _ => "entering",
        }
    }
}

#[hook]
pub fn use_presence(open: bool, exit_ms: u32) -> Presence {
    let phase = use_state(|| Presence::initial(open));
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let phase = phase.clone();
        let exit_timer = exit_timer.clone();
        use_effect_with_deps(
            move |open| {
                // Dropping a pending timeout cancels it.
                exit_timer.borrow_mut().take();

                let next = (*phase).next(*open);
                if next != *phase {
                    phase.set(next);
                }
                if next == Presence::Leaving {
                    let setter = phase.setter();
                    *exit_timer.borrow_mut() = Some(Timeout::new(exit_ms, move || {
                        setter.set(next.settle());
                    }));
                }
                || ()
            },
            open,
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_cycle() {
        let p = Presence::initial(false);
        assert_eq!(p, Presence::Hidden);
        assert!(!p.is_mounted());

        let p = p.next(true);
        assert_eq!(p, Presence::Shown);
        assert_eq!(p.class(), "entering");

        let p = p.next(false);
        assert_eq!(p, Presence::Leaving);
        assert!(p.is_mounted());
        assert_eq!(p.class(), "leaving");

        assert_eq!(p.settle(), Presence::Hidden);
    }

    #[test]
    fn reopening_while_leaving_shows_again() {
        let p = Presence::Shown.next(false).next(true);
        assert_eq!(p, Presence::Shown);
        assert_eq!(p.settle(), Presence::Shown);
    }

    #[test]
    fn closing_a_hidden_overlay_stays_hidden() {
        assert_eq!(Presence::Hidden.next(false), Presence::Hidden);
        assert_eq!(Presence::Hidden.settle(), Presence::Hidden);
        assert_eq!(Presence::initial(true), Presence::Shown);
    }
}
