use rand::Rng;
use yew::prelude::*;

use crate::config::PARTICLE_COUNT;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of the container.
    pub x: f64,
    /// Vertical position, percent of the container.
    pub y: f64,
    /// Diameter in px.
    pub size: f64,
    /// Animation start offset in seconds.
    pub delay: f64,
    /// Length of one float cycle in seconds.
    pub duration: f64,
}

pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..5.0),
            delay: rng.gen_range(0.0..2.0),
            duration: rng.gen_range(3.0..5.0),
        })
        .collect()
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.duration, self.delay
        )
    }
}

/// Decorative floating dots behind the hero. The set is drawn once per mount.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let particles = use_state(|| generate_particles(&mut rand::thread_rng(), PARTICLE_COUNT));

    let particle_css = r#"
        .particle-field {
            position: absolute;
            inset: 0;
            overflow: hidden;
            pointer-events: none;
            z-index: 0;
        }
        .particle {
            position: absolute;
            border-radius: 9999px;
            background: #fef9c3;
            opacity: 0.2;
            animation-name: particle-float;
            animation-timing-function: ease-in-out;
            animation-iteration-count: infinite;
        }
        @keyframes particle-float {
            0%   { transform: translateY(0);     opacity: 0.2; }
            50%  { transform: translateY(-20px); opacity: 0.8; }
            100% { transform: translateY(0);     opacity: 0.2; }
        }
    "#;

    html! {
        <div class="particle-field" aria-hidden="true">
            <style>{particle_css}</style>
            { for particles.iter().map(|particle| html! {
                <div class="particle" key={particle.id} style={particle.style()} />
            })}
        </div>
    }
}
