//! Inspect operation - describe a source file as the generator sees it.

use std::path::Path;

use repogen_codegen::RepositoryGenerator;
use repogen_ir::SourceUnit;

use crate::reports::InspectReport;

/// Execute the inspect operation.
pub fn inspect(generator: &RepositoryGenerator, source: &Path, unit: SourceUnit) -> InspectReport {
    let entity = generator.find_entity_class(&unit.classes);
    let id_field = entity.and_then(|e| generator.find_id_field(e));
    let primary_key_type = entity.map(|e| {
        generator
            .compute_substitutions(e, id_field)
            .primary_key_type()
            .to_string()
    });

    let entity_name = entity.map(|e| e.name.clone());
    let id_name = id_field.map(|f| f.name.clone());

    InspectReport {
        source: source.to_path_buf(),
        unit,
        entity: entity_name,
        id_field: id_name,
        primary_key_type,
    }
}
