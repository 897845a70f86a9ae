use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::LAUNCH_COUNTDOWN;

/// Time left until launch, stepped down one second per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// `None` when a field is outside its calendar range.
    pub fn new(days: u32, hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self {
            days,
            hours,
            minutes,
            seconds,
        })
    }

    pub fn is_finished(&self) -> bool {
        *self == Self::ZERO
    }

    /// One second later. Borrows from the next larger unit when a smaller
    /// one is already zero; all-zero stays all-zero.
    pub fn tick(self) -> Self {
        let Countdown {
            days,
            hours,
            minutes,
            seconds,
        } = self;
        if seconds > 0 {
            Self { seconds: seconds - 1, ..self }
        } else if minutes > 0 {
            Self {
                minutes: minutes - 1,
                seconds: 59,
                ..self
            }
        } else if hours > 0 {
            Self {
                hours: hours - 1,
                minutes: 59,
                seconds: 59,
                ..self
            }
        } else if days > 0 {
            Self {
                days: days - 1,
                hours: 23,
                minutes: 59,
                seconds: 59,
            }
        } else {
            self
        }
    }

    fn cells(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "Days"),
            (format!("{:02}", self.hours), "Hours"),
            (format!("{:02}", self.minutes), "Minutes"),
            (format!("{:02}", self.seconds), "Seconds"),
        ]
    }
}

impl Default for Countdown {
    fn default() -> Self {
        let (days, hours, minutes, seconds) = LAUNCH_COUNTDOWN;
        Self::new(days, hours, minutes, seconds).unwrap_or(Self::ZERO)
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                if self.is_finished() {
                    self
                } else {
                    Rc::new(self.tick())
                }
            }
        }
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let countdown = use_reducer_eq(Countdown::default);

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    countdown.dispatch(CountdownAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let countdown_css = r#"
        .countdown {
            display: flex;
            gap: 1rem;
            justify-content: center;
            margin: 1.5rem 0;
        }
        .countdown-cell {
            min-width: 4.5rem;
            padding: 0.75rem 0.5rem;
            background: rgba(31, 41, 55, 0.85);
            border: 1px solid #4b5563;
            border-radius: 12px;
            text-align: center;
        }
        .countdown-value {
            font-size: 2rem;
            font-weight: 700;
            color: #fef9c3;
            font-variant-numeric: tabular-nums;
        }
        .countdown-label {
            font-size: 0.75rem;
            color: #d1d5db;
            text-transform: uppercase;
            letter-spacing: 0.08em;
        }
        @media (max-width: 767px) {
            .countdown { gap: 0.5rem; }
            .countdown-cell { min-width: 3.5rem; }
            .countdown-value { font-size: 1.4rem; }
        }
    "#;

    html! {
        <>
            <style>{countdown_css}</style>
            <div class="countdown" role="timer" aria-live="off">
                { for countdown.cells().into_iter().map(|(value, label)| html! {
                    <div class="countdown-cell" key={label}>
                        <div class="countdown-value">{value}</div>
                        <div class="countdown-label">{label}</div>
                    </div>
                })}
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_seconds(c: &Countdown) -> u64 {
        c.days as u64 * 86_400 + c.hours as u64 * 3_600 + c.minutes as u64 * 60 + c.seconds as u64
    }

    fn cd(days: u32, hours: u8, minutes: u8, seconds: u8) -> Countdown {
        Countdown::new(days, hours, minutes, seconds).unwrap()
    }

    #[test]
    fn last_second_reaches_zero() {
        assert_eq!(cd(0, 0, 0, 1).tick(), Countdown::ZERO);
    }

    #[test]
    fn zero_is_held() {
        assert_eq!(Countdown::ZERO.tick(), Countdown::ZERO);
        assert_eq!(Countdown::ZERO.tick().tick(), Countdown::ZERO);
    }

    #[test]
    fn borrows_through_every_unit() {
        assert_eq!(cd(0, 0, 1, 0).tick(), cd(0, 0, 0, 59));
        assert_eq!(cd(0, 1, 0, 0).tick(), cd(0, 0, 59, 59));
        assert_eq!(cd(2, 0, 0, 0).tick(), cd(1, 23, 59, 59));
    }

    #[test]
    fn runs_down_to_zero_in_exactly_total_seconds() {
        let mut countdown = cd(0, 1, 2, 3);
        let total = total_seconds(&countdown);
        for step in 0..total {
            assert!(!countdown.is_finished(), "finished early at {step}");
            let next = countdown.tick();
            assert_eq!(total_seconds(&next) + 1, total_seconds(&countdown));
            countdown = next;
        }
        assert!(countdown.is_finished());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(Countdown::new(0, 24, 0, 0).is_none());
        assert!(Countdown::new(0, 0, 60, 0).is_none());
        assert!(Countdown::new(0, 0, 0, 60).is_none());
    }

    #[test]
    fn launch_constant_is_the_default() {
        assert_eq!(Countdown::default(), cd(30, 12, 45, 30));
    }

    #[test]
    fn reducer_keeps_the_same_state_at_zero() {
        let zero = Rc::new(Countdown::ZERO);
        let next = zero.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&zero, &next));

        let running = Rc::new(cd(0, 0, 0, 2));
        assert_eq!(*running.reduce(CountdownAction::Tick), cd(0, 0, 0, 1));
    }

    #[test]
    fn cells_are_zero_padded() {
        let labels: Vec<_> = cd(3, 4, 5, 6).cells().into_iter().collect();
        assert_eq!(labels[0], ("03".to_string(), "Days"));
        assert_eq!(labels[3], ("06".to_string(), "Seconds"));
    }
}
