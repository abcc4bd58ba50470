//! Blog articles shown in the modal
//!
//! Each article is static markup. Articles with an interactive demo list the
//! element ids the demo initialiser looks up after the markup is injected.

/// Element ids shared between article markup and the demo initialisers
pub mod ids {
    pub const DEMO_CANVAS: &str = "demoCanvas";
    pub const DEMO_MESH_DENSITY: &str = "demo-mesh-density";
    pub const DEMO_MESH_VALUE: &str = "demo-mesh-value";

    pub const DEMO_TEMP_SLIDER: &str = "demo-temp-slider";
    pub const DEMO_TEMP_VALUE: &str = "demo-temp-value";

    pub const DYNAMICS_CANVAS: &str = "dynamics-canvas";
    pub const DEMO_MASS: &str = "demo-mass";
    pub const DEMO_SPRING: &str = "demo-spring";
    pub const DEMO_DAMPING: &str = "demo-damping";
    pub const DEMO_FREQ: &str = "demo-freq";
    pub const DEMO_FORCE: &str = "demo-force";
    pub const TIME_CANVAS: &str = "time-canvas";
    pub const FREQ_CANVAS: &str = "freq-canvas";
}

use crate::sim::oscillator::Parameter;

/// Interactive widget embedded in an article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Mesh,
    Thermal,
    Oscillator,
}

impl DemoKind {
    /// Ids the initialiser needs; without them the demo is skipped
    pub fn required_ids(&self) -> &'static [&'static str] {
        match self {
            DemoKind::Mesh => &[ids::DEMO_CANVAS, ids::DEMO_MESH_DENSITY, ids::DEMO_MESH_VALUE],
            DemoKind::Thermal => &[ids::DEMO_TEMP_SLIDER, ids::DEMO_TEMP_VALUE],
            DemoKind::Oscillator => &[
                ids::DYNAMICS_CANVAS,
                ids::DEMO_MASS,
                ids::DEMO_SPRING,
                ids::DEMO_DAMPING,
                ids::DEMO_FREQ,
            ],
        }
    }

    /// Ids that enable extra features when present
    pub fn optional_ids(&self) -> &'static [&'static str] {
        match self {
            DemoKind::Oscillator => &[ids::DEMO_FORCE, ids::TIME_CANVAS, ids::FREQ_CANVAS],
            DemoKind::Mesh | DemoKind::Thermal => &[],
        }
    }
}

/// Slider id for an oscillator parameter
pub fn slider_id(param: Parameter) -> &'static str {
    match param {
        Parameter::Mass => ids::DEMO_MASS,
        Parameter::Stiffness => ids::DEMO_SPRING,
        Parameter::Damping => ids::DEMO_DAMPING,
        Parameter::ForceAmplitude => ids::DEMO_FORCE,
        Parameter::ForcingFrequency => ids::DEMO_FREQ,
    }
}

/// Value label id for an oscillator parameter
pub fn label_id(param: Parameter) -> &'static str {
    match param {
        Parameter::Mass => "demo-mass-val",
        Parameter::Stiffness => "demo-spring-val",
        Parameter::Damping => "demo-damping-val",
        Parameter::ForceAmplitude => "demo-force-val",
        Parameter::ForcingFrequency => "demo-freq-val",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    Fea,
    Comsol,
    Dynamics,
    Flexure,
}

impl Article {
    pub const ALL: [Article; 4] = [Article::Fea, Article::Comsol, Article::Dynamics, Article::Flexure];

    pub fn title(&self) -> &'static str {
        match self {
            Article::Fea => "Finite Element Analysis Fundamentals",
            Article::Comsol => "COMSOL Multiphysics Simulations",
            Article::Dynamics => "Dynamics & Vibration Analysis",
            Article::Flexure => "Precision Flexure Design",
        }
    }

    pub fn demo(&self) -> Option<DemoKind> {
        match self {
            Article::Fea => Some(DemoKind::Mesh),
            Article::Comsol => Some(DemoKind::Thermal),
            Article::Dynamics => Some(DemoKind::Oscillator),
            Article::Flexure => None,
        }
    }

    pub fn markup(&self) -> &'static str {
        match self {
            Article::Fea => FEA_MARKUP,
            Article::Comsol => COMSOL_MARKUP,
            Article::Dynamics => DYNAMICS_MARKUP,
            Article::Flexure => FLEXURE_MARKUP,
        }
    }
}

/// Ids from `wanted` that have no `id="..."` attribute in `markup`
pub fn missing_ids<'a>(markup: &str, wanted: &[&'a str]) -> Vec<&'a str> {
    wanted
        .iter()
        .copied()
        .filter(|id| !markup.contains(&format!("id=\"{id}\"")))
        .collect()
}

const FEA_MARKUP: &str = r#"
<div class="article-content">
    <h2>Finite Element Analysis Fundamentals</h2>
    <p>Finite Element Analysis (FEA) is a numerical method for solving complex engineering problems. It divides a complex structure into smaller, simpler parts called finite elements.</p>
    <h3>Key Concepts:</h3>
    <ul>
        <li><strong>Mesh Generation:</strong> The process of dividing the geometry into finite elements</li>
        <li><strong>Element Types:</strong> Different shapes (triangles, quadrilaterals, tetrahedra, hexahedra)</li>
        <li><strong>Boundary Conditions:</strong> Applied loads and constraints</li>
        <li><strong>Material Properties:</strong> Young's modulus, Poisson's ratio, density</li>
    </ul>
    <h3>Applications in Mechanical Engineering:</h3>
    <ul>
        <li>Structural analysis and stress prediction</li>
        <li>Thermal analysis and heat transfer</li>
        <li>Dynamic analysis and vibration</li>
        <li>Fatigue and fracture analysis</li>
    </ul>
    <div class="interactive-demo">
        <h4>Interactive Mesh Density Demo</h4>
        <p>Adjust the mesh density slider to see how it affects the finite element mesh:</p>
        <div class="demo-controls">
            <label>Mesh Density: <span id="demo-mesh-value">5</span></label>
            <input type="range" id="demo-mesh-density" min="1" max="10" value="5">
        </div>
        <div class="demo-visualization">
            <canvas id="demoCanvas" width="400" height="300" style="border: 1px solid #e5e7eb; margin-top: 1rem; border-radius: 8px;"></canvas>
        </div>
    </div>
</div>
"#;

const COMSOL_MARKUP: &str = r#"
<div class="article-content">
    <h2>COMSOL Multiphysics Simulations</h2>
    <p>COMSOL Multiphysics is a powerful simulation software that enables engineers to solve complex multiphysics problems by coupling different physical phenomena.</p>
    <h3>Multiphysics Coupling:</h3>
    <ul>
        <li><strong>Thermal-Structural:</strong> Temperature changes causing structural deformation</li>
        <li><strong>Fluid-Structure:</strong> Fluid flow interacting with solid structures</li>
        <li><strong>Electromagnetic:</strong> Electric and magnetic field interactions</li>
        <li><strong>Acoustic-Structural:</strong> Sound waves and structural vibrations</li>
    </ul>
    <h3>Advanced Features:</h3>
    <ul>
        <li>Automatic mesh generation and refinement</li>
        <li>Parametric studies and optimization</li>
        <li>Real-time visualization and post-processing</li>
        <li>CAD integration and geometry import</li>
    </ul>
    <div class="interactive-demo">
        <h4>Thermal Analysis Demo</h4>
        <p>Adjust the temperature to see how it affects the heat distribution:</p>
        <div class="demo-controls">
            <label>Temperature: <span id="demo-temp-value">50°C</span></label>
            <input type="range" id="demo-temp-slider" min="20" max="100" value="50">
        </div>
        <div class="thermal-visualization" style="margin-top: 1rem;">
            <div class="heat-map" style="width: 300px; height: 200px; border-radius: 8px; background: radial-gradient(circle at center, rgba(239, 68, 68, 0.5) 0%, rgba(59, 130, 246, 0.4) 50%, rgba(34, 197, 94, 0.2) 100%);"></div>
        </div>
    </div>
</div>
"#;

const DYNAMICS_MARKUP: &str = r#"
<div class="article-content">
    <h2>Dynamics &amp; Vibration Analysis</h2>
    <p>This interactive simulation demonstrates the fundamental principles of vibration analysis and dynamics. The mass-spring-damper system is one of the most important models in mechanical engineering.</p>
    <h3>System Parameters</h3>
    <ul>
        <li><strong>Mass (m):</strong> The inertial element that stores kinetic energy</li>
        <li><strong>Spring Constant (k):</strong> The stiffness that stores potential energy</li>
        <li><strong>Damping Coefficient (c):</strong> The energy dissipation mechanism</li>
        <li><strong>Forcing Frequency (ω):</strong> The frequency of the external excitation</li>
    </ul>
    <h3>Mathematical Model</h3>
    <div style="text-align: center; margin: 1rem 0; padding: 1rem; background: #f8fafc; border-radius: 8px; font-family: 'Courier New', monospace;">
        mẍ + cẋ + kx = F₀sin(ωt)
    </div>
    <h3>Key Concepts:</h3>
    <ul>
        <li><strong>Natural Frequency:</strong> ωₙ = √(k/m)</li>
        <li><strong>Damping Ratio:</strong> ζ = c/(2√(mk))</li>
        <li><strong>Resonance:</strong> Peak response when ω ≈ ωₙ</li>
    </ul>
    <div class="interactive-demo">
        <h4>Interactive Simulation</h4>
        <div class="demo-controls">
            <label>Mass (kg): <input type="range" id="demo-mass" min="0.1" max="10" value="1" step="0.1"></label>
            <span id="demo-mass-val">1.0</span>
        </div>
        <div class="demo-controls">
            <label>Spring Constant (N/m): <input type="range" id="demo-spring" min="1" max="100" value="10" step="1"></label>
            <span id="demo-spring-val">10</span>
        </div>
        <div class="demo-controls">
            <label>Damping (Ns/m): <input type="range" id="demo-damping" min="0" max="20" value="1" step="0.1"></label>
            <span id="demo-damping-val">1.0</span>
        </div>
        <div class="demo-controls">
            <label>Force Amplitude (N): <input type="range" id="demo-force" min="0" max="50" value="10" step="0.5"></label>
            <span id="demo-force-val">10.0</span>
        </div>
        <div class="demo-controls">
            <label>Frequency (rad/s): <input type="range" id="demo-freq" min="0.1" max="20" value="6.28" step="0.1"></label>
            <span id="demo-freq-val">6.28</span>
        </div>
        <div style="margin-top: 2rem;">
            <canvas id="dynamics-canvas" width="600" height="300" style="border: 1px solid #e5e7eb; border-radius: 8px; background: white;"></canvas>
        </div>
        <div style="display: flex; gap: 1rem; margin-top: 1rem; flex-wrap: wrap;">
            <canvas id="time-canvas" width="290" height="200" style="border: 1px solid #e5e7eb; border-radius: 8px; background: white;"></canvas>
            <canvas id="freq-canvas" width="290" height="200" style="border: 1px solid #e5e7eb; border-radius: 8px; background: white;"></canvas>
        </div>
    </div>
    <h3>Engineering Applications</h3>
    <ul>
        <li>Vibration isolation systems for sensitive equipment</li>
        <li>Shock absorbers in automotive applications</li>
        <li>Structural dynamics analysis for buildings</li>
        <li>Control system design for precision positioning</li>
    </ul>
</div>
"#;

const FLEXURE_MARKUP: &str = r#"
<div class="article-content">
    <h2>Precision Flexure Design</h2>
    <p>Flexure mechanisms are compliant mechanisms that provide motion through elastic deformation, offering high precision and repeatability without friction or backlash.</p>
    <h3>Design Principles:</h3>
    <ul>
        <li><strong>Compliance:</strong> Controlled flexibility in desired directions</li>
        <li><strong>Stiffness:</strong> Resistance to unwanted deformations</li>
        <li><strong>Stress Concentration:</strong> Managing high stress areas</li>
        <li><strong>Kinematic Design:</strong> Constraining degrees of freedom</li>
    </ul>
    <h3>Applications:</h3>
    <ul>
        <li>Precision positioning stages in semiconductor manufacturing</li>
        <li>Micro-manipulation systems</li>
        <li>Optical alignment mechanisms</li>
        <li>Vibration isolation systems</li>
    </ul>
    <h3>Key Design Considerations:</h3>
    <ul>
        <li>Material selection (often steel or titanium for high-performance applications)</li>
        <li>Stress analysis to prevent fatigue failure</li>
        <li>Stiffness optimization for desired motion characteristics</li>
        <li>Manufacturing tolerances and surface finish requirements</li>
    </ul>
    <div class="interactive-demo">
        <h4>Flexure Design Examples</h4>
        <p>Common flexure types used in precision engineering:</p>
        <ul>
            <li><strong>Leaf Springs:</strong> Simple bending elements</li>
            <li><strong>Cross Flexures:</strong> Two perpendicular elements</li>
            <li><strong>Cartwheel Flexures:</strong> Radial spoke design</li>
            <li><strong>Blade Flexures:</strong> Thin, flexible elements</li>
        </ul>
    </div>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_has_required_ids() {
        for article in Article::ALL {
            if let Some(demo) = article.demo() {
                let missing = missing_ids(article.markup(), demo.required_ids());
                assert!(missing.is_empty(), "{:?} missing {:?}", article, missing);
            }
        }
    }

    #[test]
    fn test_dynamics_ships_extended_demo() {
        let demo = DemoKind::Oscillator;
        assert!(missing_ids(Article::Dynamics.markup(), demo.optional_ids()).is_empty());
        for param in Parameter::ALL {
            assert!(Article::Dynamics.markup().contains(slider_id(param)));
            assert!(Article::Dynamics.markup().contains(label_id(param)));
        }
    }

    #[test]
    fn test_markup_contains_title() {
        for article in Article::ALL {
            let heading = article.title().replace('&', "&amp;");
            assert!(article.markup().contains(&heading), "{:?}", article);
        }
    }

    #[test]
    fn test_missing_ids_reports_absent() {
        let missing = missing_ids(r#"<canvas id="demoCanvas">"#, DemoKind::Mesh.required_ids());
        assert_eq!(missing, vec![ids::DEMO_MESH_DENSITY, ids::DEMO_MESH_VALUE]);
    }

    #[test]
    fn test_flexure_has_no_demo() {
        assert_eq!(Article::Flexure.demo(), None);
    }
}
