//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Seconds per tick at the canonical rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Globe ---

/// Radius of the Cartesian globe used by physics guidance.
/// One simulation unit equals 0.01 rad of arc, so angular distances
/// scale to units as `radians * UNITS_PER_RADIAN`.
pub const GLOBE_RADIUS: f64 = 100.0;

/// Conversion from angular distance (radians) to simulation units.
pub const UNITS_PER_RADIAN: f64 = 100.0;

// --- Ballistic missiles ---

/// ICBM ground speed (units/s).
pub const ICBM_SPEED: f64 = 3.0;

/// Minimum flight duration regardless of distance (milliseconds).
/// Keeps even very short hops visible and interceptable.
pub const MIN_FLIGHT_DURATION_MS: f64 = 8000.0;

/// Apex height as a fraction of ground distance (units).
pub const APEX_FACTOR: f64 = 0.1;

/// Minimum apex height (units).
pub const APEX_MIN: f64 = 3.0;

/// Maximum apex height (units).
pub const APEX_MAX: f64 = 18.0;

/// Reentry sharpness exponent for the altitude profile.
/// Below 1.0 the descent is shallower than the ascent.
pub const REENTRY_SHARPNESS: f64 = 0.6;

/// Progress below which a ballistic missile is in boost phase.
pub const BOOST_PHASE_END: f64 = 0.15;

/// Progress above which a ballistic missile is in reentry phase.
pub const REENTRY_PHASE_START: f64 = 0.80;

// --- Warhead effects ---

/// Radius within which cities take casualties (units).
pub const BLAST_RADIUS: f64 = 6.0;

/// Radius within which buildings are destroyed outright (units).
pub const BUILDING_DESTRUCTION_RADIUS: f64 = 4.0;

/// Fraction of a city's population lost at ground zero.
pub const CASUALTY_FACTOR: f64 = 0.4;

// --- Silos ---

/// Missile capacity of a freshly built silo.
pub const SILO_MAX_AMMO: u32 = 10;

/// Cooldown between strategic launches from one silo (seconds).
pub const ICBM_COOLDOWN_SECS: f64 = 5.0;

/// Cooldown between interceptor launches from one silo (seconds).
pub const INTERCEPTOR_COOLDOWN_SECS: f64 = 2.0;

/// Highest DEFCON level at which strategic launches are permitted.
pub const STRATEGIC_LAUNCH_DEFCON: u8 = 2;

// --- Radar ---

/// Default tracking radar coverage radius (units).
pub const RADAR_RANGE_UNITS: f64 = 60.0;

// --- Interceptors (shared) ---

/// Interceptor speed (units/s).
pub const INTERCEPTOR_SPEED: f64 = 6.0;

/// Full fuel load (seconds of burn).
pub const INTERCEPTOR_MAX_FUEL_SECS: f64 = 45.0;

/// Hard flight-time limit before forced expiry (seconds).
pub const INTERCEPTOR_MAX_FLIGHT_SECS: f64 = 90.0;

/// Time an interceptor may coast after flameout before expiry (seconds).
pub const COAST_TIMEOUT_SECS: f64 = 15.0;

/// Boost phase duration (seconds).
pub const BOOST_DURATION_SECS: f64 = 3.0;

/// Pitch/track phase duration after boost (seconds).
pub const PITCH_DURATION_SECS: f64 = 4.0;

/// Estimated time-to-intercept below which guidance goes terminal (seconds).
pub const TERMINAL_TTI_SECS: f64 = 5.0;

/// Proximity radius for an intercept attempt (units).
pub const INTERCEPT_RADIUS: f64 = 2.0;

// --- Kinematic guidance ---

/// Minimum progress before a kinematic interceptor may attempt an
/// intercept (prevents instant self-intercept at launch).
pub const KINEMATIC_MIN_PROGRESS: f64 = 0.2;

/// Progress past the aim point at which a kinematic interceptor expires.
/// The overshoot grace lets it attempt intercepts right at its endpoint.
pub const KINEMATIC_OVERSHOOT_PROGRESS: f64 = 1.1;

/// Minimum kinematic flight duration (milliseconds).
pub const KINEMATIC_MIN_FLIGHT_MS: f64 = 2000.0;

/// Apex height fraction for the kinematic interceptor arc.
pub const KINEMATIC_APEX_FACTOR: f64 = 0.05;

/// Minimum apex height for the kinematic interceptor arc (units).
pub const KINEMATIC_APEX_MIN: f64 = 1.0;

// --- Proportional-navigation guidance ---

/// Maximum heading change rate (degrees/s).
pub const MAX_TURN_RATE_DEG: f64 = 45.0;

/// Maximum climb angle change rate (degrees/s).
pub const MAX_PITCH_RATE_DEG: f64 = 30.0;

/// Nose-down rate while unguided (degrees/s).
pub const UNGUIDED_PITCH_RATE_DEG: f64 = 10.0;

/// Steepest ballistic dive angle (degrees).
pub const MIN_CLIMB_DEG: f64 = -60.0;

/// Fixed climb angle held through boost (degrees).
pub const BOOST_CLIMB_DEG: f64 = 65.0;

/// Climb command clamp when steering toward a predicted point (degrees).
pub const MAX_CLIMB_CMD_DEG: f64 = 80.0;

// --- Physics guidance ---

/// Thrust acceleration (units/s^2).
pub const PHYSICS_THRUST_ACCEL: f64 = 10.0;

/// Gravitational acceleration toward the globe center (units/s^2).
pub const PHYSICS_GRAVITY: f64 = 2.0;

/// Aerodynamic speed cap (units/s).
pub const PHYSICS_MAX_SPEED: f64 = 8.0;

/// Maximum heading rotation rate (rad/s).
pub const PHYSICS_TURN_RATE_RAD: f64 = 0.8;

// --- Intercept predictor ---

/// Fixed-point iterations for rendezvous prediction.
pub const PREDICTOR_ITERATIONS: u32 = 5;

/// Target progress beyond which prediction fails (target arriving).
pub const PREDICTOR_MAX_PROGRESS: f64 = 0.98;

// --- Hit model ---

/// Base hit probability against a boosting target.
pub const HIT_PROB_BOOST: f64 = 0.35;

/// Base hit probability against a midcourse target.
pub const HIT_PROB_MIDCOURSE: f64 = 0.58;

/// Base hit probability against a reentering target.
pub const HIT_PROB_REENTRY: f64 = 0.45;

/// Bonus per tracking radar beyond the first (while guided).
pub const RADAR_TRACK_BONUS: f64 = 0.04;

/// Cap on the total tracking radar bonus.
pub const RADAR_TRACK_BONUS_CAP: f64 = 0.12;

/// Penalty while guidance is inactive.
pub const UNGUIDED_PENALTY: f64 = 0.25;

/// Penalty when remaining fuel fraction is below `LOW_FUEL_FRACTION`.
pub const LOW_FUEL_PENALTY: f64 = 0.15;

/// Fuel fraction below which the low-fuel penalty applies.
pub const LOW_FUEL_FRACTION: f64 = 0.25;

/// Hit probability floor.
pub const HIT_PROB_MIN: f64 = 0.05;

/// Hit probability ceiling.
pub const HIT_PROB_MAX: f64 = 0.95;

// --- Lifecycle ---

/// Seconds a resolved missile/interceptor lingers before despawn,
/// so the resolution can still be rendered.
pub const LINGER_SECS: f64 = 3.0;
