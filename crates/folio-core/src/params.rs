/// Build-time scene configuration. One instance per page session, owned by
/// the composition root and handed to whichever subsystem needs a knob.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particle_count: usize,
    pub node_count: usize,
    pub link_threshold: f32,
    pub magnet_strength: f32,
    pub scramble_duration_ms: u32,
    pub hold_duration_ms: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: 1500,
            node_count: 50,
            link_threshold: 1.2,
            magnet_strength: 0.3,
            scramble_duration_ms: 800,
            hold_duration_ms: 2000,
        }
    }
}
