//! Variable collection bookkeeping.
//!
//! Everything here is idempotent: the collection, its modes, and every
//! variable are found before they are created, so re-running a generation
//! updates values in place instead of duplicating tokens.

use themecss::classify::{is_color_variable, is_radius_variable};
use themecss::{ParsedTheme, ParsedValue};

use crate::error::HostResult;
use crate::host::{
    Collection, CollectionId, DesignHost, Mode, ModeId, Rgba, Variable, VariableKind,
    VariableValue,
};
use crate::naming::grouped_color_name;

/// Name of the collection all theme tokens live in.
pub const COLLECTION_NAME: &str = "Theme";
/// Display name of the light mode column.
pub const LIGHT_MODE_NAME: &str = "Light";
/// Display name of the dark mode column.
pub const DARK_MODE_NAME: &str = "Dark";
/// Pixels per rem when resolving dimensions.
pub const REM_BASE: f64 = 16.0;

/// Collections cap out at this many modes; past it, no Dark mode is added.
const MODE_LIMIT: usize = 4;

/// The collection plus the two mode columns writes go to.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeBinding {
    pub collection: Collection,
    pub light_mode: ModeId,
    pub dark_mode: ModeId,
}

/// Outcome of one token batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBatch {
    pub binding: ModeBinding,
    pub variable_count: usize,
}

/// Find or create the `Theme` collection with Light and Dark modes.
///
/// An existing collection is adopted rather than replaced: a lone mode that
/// is not named Light is renamed to Light, and Dark is added when there is
/// room. When a mode cannot be found or added, the first (and second) columns
/// stand in so writes always have somewhere to go.
pub async fn ensure_collection(host: &dyn DesignHost) -> HostResult<ModeBinding> {
    if let Some(mut collection) = host.collection_named(COLLECTION_NAME).await? {
        let light = collection
            .mode_named(LIGHT_MODE_NAME)
            .map(|mode| mode.id.clone());
        let mut dark = collection
            .mode_named(DARK_MODE_NAME)
            .map(|mode| mode.id.clone());

        if light.is_none() && collection.modes.len() == 1 {
            host.rename_mode(&collection.id, &collection.modes[0].id, LIGHT_MODE_NAME)
                .await?;
            collection.modes[0].name = LIGHT_MODE_NAME.to_string();
        }

        if dark.is_none() && collection.modes.len() < MODE_LIMIT {
            let id = host.add_mode(&collection.id, DARK_MODE_NAME).await?;
            collection.modes.push(Mode {
                id: id.clone(),
                name: DARK_MODE_NAME.to_string(),
            });
            dark = Some(id);
        }

        let light_mode = light.unwrap_or_else(|| collection.modes[0].id.clone());
        let dark_mode = dark
            .or_else(|| collection.modes.get(1).map(|mode| mode.id.clone()))
            .unwrap_or_else(|| collection.modes[0].id.clone());

        return Ok(ModeBinding {
            collection,
            light_mode,
            dark_mode,
        });
    }

    let mut collection = host.create_collection(COLLECTION_NAME).await?;
    let light_mode = collection.modes[0].id.clone();
    host.rename_mode(&collection.id, &light_mode, LIGHT_MODE_NAME)
        .await?;
    collection.modes[0].name = LIGHT_MODE_NAME.to_string();

    let dark_mode = host.add_mode(&collection.id, DARK_MODE_NAME).await?;
    collection.modes.push(Mode {
        id: dark_mode.clone(),
        name: DARK_MODE_NAME.to_string(),
    });

    Ok(ModeBinding {
        collection,
        light_mode,
        dark_mode,
    })
}

/// Find a variable by name in a collection, creating it when absent.
pub async fn ensure_variable(
    host: &dyn DesignHost,
    collection: &CollectionId,
    name: &str,
    kind: VariableKind,
) -> HostResult<Variable> {
    let existing = host.variables_in_collection(collection).await?;
    if let Some(found) = existing.into_iter().find(|variable| variable.name == name) {
        return Ok(found);
    }
    host.create_variable(collection, name, kind).await
}

/// Write every token of a parsed theme into the `Theme` collection.
///
/// Walks the union of light and dark names in sorted order, so the host sees
/// a deterministic call sequence. Shadows and values that do not fit their
/// name's category are skipped. A failure on one variable is logged and
/// skipped; the batch continues and the failed variable is not counted.
pub async fn create_variables_from_theme(
    host: &dyn DesignHost,
    theme: &ParsedTheme,
) -> HostResult<TokenBatch> {
    let binding = ensure_collection(host).await?;
    log::debug!("Writing tokens into collection {}", binding.collection.id);

    let mut variable_count = 0;
    for name in theme.variable_names() {
        let light = theme.light.get(&name);
        let dark = theme.dark.get(&name);
        let Some(reference) = light.or(dark) else {
            continue;
        };

        match write_token(host, &binding, &name, reference, light, dark).await {
            Ok(true) => variable_count += 1,
            Ok(false) => {}
            Err(err) => log::error!("Failed to create variable {}: {}", name, err),
        }
    }

    Ok(TokenBatch {
        binding,
        variable_count,
    })
}

/// Dispatch one name to its token shape. Returns whether a token was written.
///
/// The checks mirror each other's misses: a color-named variable whose value
/// is not a color falls through to the later categories rather than erroring.
async fn write_token(
    host: &dyn DesignHost,
    binding: &ModeBinding,
    name: &str,
    reference: &ParsedValue,
    light: Option<&ParsedValue>,
    dark: Option<&ParsedValue>,
) -> HostResult<bool> {
    let collection = &binding.collection.id;

    if is_color_variable(name) && reference.as_color().is_some() {
        let grouped = grouped_color_name(name);
        let variable = ensure_variable(host, collection, &grouped, VariableKind::Color).await?;
        if let Some(color) = light.and_then(ParsedValue::as_color) {
            host.set_mode_value(
                &variable.id,
                &binding.light_mode,
                VariableValue::Color(Rgba::from(color)),
            )
            .await?;
        }
        if let Some(color) = dark.and_then(ParsedValue::as_color) {
            host.set_mode_value(
                &variable.id,
                &binding.dark_mode,
                VariableValue::Color(Rgba::from(color)),
            )
            .await?;
        }
        return Ok(true);
    }

    if is_radius_variable(name) {
        if let Some(dimension) = reference.as_dimension() {
            let grouped = format!("effects/{}", name);
            let variable = ensure_variable(host, collection, &grouped, VariableKind::Float).await?;
            // Radius is the same in both modes.
            let px = dimension.px(REM_BASE);
            host.set_mode_value(&variable.id, &binding.light_mode, VariableValue::Float(px))
                .await?;
            host.set_mode_value(&variable.id, &binding.dark_mode, VariableValue::Float(px))
                .await?;
            return Ok(true);
        }
    }

    if name.starts_with("text-") {
        if let Some(dimension) = reference.as_dimension() {
            let grouped = format!("typography/{}", name);
            let variable = ensure_variable(host, collection, &grouped, VariableKind::Float).await?;
            let px = dimension.px(REM_BASE);
            host.set_mode_value(&variable.id, &binding.light_mode, VariableValue::Float(px))
                .await?;
            host.set_mode_value(&variable.id, &binding.dark_mode, VariableValue::Float(px))
                .await?;
            return Ok(true);
        }
    }

    if name.starts_with("font-") {
        if let Some(stack) = reference.as_font() {
            let grouped = format!("typography/{}", name);
            let variable = ensure_variable(host, collection, &grouped, VariableKind::Text).await?;
            let family = primary_family(stack);
            host.set_mode_value(
                &variable.id,
                &binding.light_mode,
                VariableValue::Text(family.clone()),
            )
            .await?;
            host.set_mode_value(&variable.id, &binding.dark_mode, VariableValue::Text(family))
                .await?;
            return Ok(true);
        }
    }

    // Shadows have no variable type on the host side; everything else that
    // lands here has a value that does not fit its name.
    Ok(false)
}

/// First family of a font stack, quotes stripped.
fn primary_family(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or(stack)
        .trim()
        .replace(['\'', '"'], "")
}

/// Variables already present in the `Theme` collection, empty when the
/// collection does not exist yet.
pub async fn existing_theme_variables(host: &dyn DesignHost) -> HostResult<Vec<Variable>> {
    match host.collection_named(COLLECTION_NAME).await? {
        Some(collection) => host.variables_in_collection(&collection.id).await,
        None => Ok(Vec::new()),
    }
}

/// Remove every variable in the `Theme` collection, returning how many were
/// removed. The collection itself and its modes stay.
pub async fn clear_theme_variables(host: &dyn DesignHost) -> HostResult<usize> {
    let variables = existing_theme_variables(host).await?;
    let count = variables.len();
    for variable in variables {
        host.remove_variable(&variable.id).await?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    // ==================== Collection bootstrap ====================

    #[tokio::test]
    async fn test_fresh_collection_gets_light_and_dark() {
        let host = MemoryHost::new();
        let binding = ensure_collection(&host).await.unwrap();

        assert_eq!(binding.collection.name, COLLECTION_NAME);
        assert_eq!(host.mode_names(&binding.collection.id), ["Light", "Dark"]);
        assert_ne!(binding.light_mode, binding.dark_mode);
    }

    #[tokio::test]
    async fn test_ensure_collection_is_idempotent() {
        let host = MemoryHost::new();
        let first = ensure_collection(&host).await.unwrap();
        let second = ensure_collection(&host).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(host.mode_names(&first.collection.id).len(), 2);
    }

    #[tokio::test]
    async fn test_lone_default_mode_is_renamed_to_light() {
        let host = MemoryHost::new();
        let seeded = host.seed_collection(COLLECTION_NAME, &["Mode 1"]);

        let binding = ensure_collection(&host).await.unwrap();

        assert_eq!(binding.collection.id, seeded.id);
        assert_eq!(host.mode_names(&seeded.id), ["Light", "Dark"]);
        assert_eq!(binding.light_mode, seeded.modes[0].id);
    }

    #[tokio::test]
    async fn test_full_collection_skips_dark_and_falls_back() {
        let host = MemoryHost::new();
        let seeded = host.seed_collection(COLLECTION_NAME, &["Light", "Brand", "Print", "Kiosk"]);

        let binding = ensure_collection(&host).await.unwrap();

        // No room for Dark: nothing added, second column stands in.
        assert_eq!(host.mode_names(&seeded.id).len(), 4);
        assert_eq!(binding.light_mode, seeded.modes[0].id);
        assert_eq!(binding.dark_mode, seeded.modes[1].id);
    }

    #[tokio::test]
    async fn test_multi_mode_collection_without_light_keeps_names() {
        let host = MemoryHost::new();
        let seeded = host.seed_collection(COLLECTION_NAME, &["Day", "Night"]);

        let binding = ensure_collection(&host).await.unwrap();

        // Two modes, so no rename; Dark still fits.
        assert_eq!(host.mode_names(&seeded.id), ["Day", "Night", "Dark"]);
        assert_eq!(binding.light_mode, seeded.modes[0].id);
        assert_eq!(
            binding.dark_mode,
            binding.collection.mode_named("Dark").unwrap().id
        );
    }

    // ==================== Helpers ====================

    #[test]
    fn test_primary_family_takes_first_and_strips_quotes() {
        assert_eq!(
            primary_family("Poppins, ui-sans-serif, system-ui, sans-serif"),
            "Poppins"
        );
        assert_eq!(
            primary_family("\"Libre Baskerville\", serif"),
            "Libre Baskerville"
        );
        assert_eq!(primary_family("'Fira Code', monospace"), "Fira Code");
        assert_eq!(primary_family("monospace"), "monospace");
    }
}
