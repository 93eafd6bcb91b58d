mod generate;

pub use generate::{
    generate_controllers, output_dir, render_controllers, GenerateOptions, GenerationReport,
    RenderedController,
};
