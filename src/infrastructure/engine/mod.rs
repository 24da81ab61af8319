//! Transcription engine adapters

mod assembly_ai;

pub use assembly_ai::AssemblyAiEngine;
