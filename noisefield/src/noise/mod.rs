use std::sync::LazyLock;

pub mod perlin;

pub use perlin::NoiseField;

pub struct Gradient {
    x: f64,
    y: f64,
    z: f64,
}

impl Gradient {
    const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x * x + self.y * y + self.z * z
    }
}

/// Midpoints of the twelve edges of a cube centered at the origin.
pub const GRADIENTS: [Gradient; 12] = [
    Gradient::new(1f64, 1f64, 0f64),
    Gradient::new(-1f64, 1f64, 0f64),
    Gradient::new(1f64, -1f64, 0f64),
    Gradient::new(-1f64, -1f64, 0f64),
    Gradient::new(1f64, 0f64, 1f64),
    Gradient::new(-1f64, 0f64, 1f64),
    Gradient::new(1f64, 0f64, -1f64),
    Gradient::new(-1f64, 0f64, -1f64),
    Gradient::new(0f64, 1f64, 1f64),
    Gradient::new(0f64, -1f64, 1f64),
    Gradient::new(0f64, 1f64, -1f64),
    Gradient::new(0f64, -1f64, -1f64),
];

static DEFAULT_FIELD: LazyLock<NoiseField> = LazyLock::new(|| {
    log::debug!("seeding the shared noise field from the thread-local generator");
    NoiseField::default()
});

/// The process-wide field, seeded from the default generator on first use.
pub fn default_field() -> &'static NoiseField {
    &DEFAULT_FIELD
}

/// Samples [`default_field`].
#[inline]
pub fn noise(x: f64, y: f64, z: f64) -> f64 {
    DEFAULT_FIELD.noise(x, y, z)
}
