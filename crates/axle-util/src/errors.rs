use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Axle operations.
#[derive(Debug, Error, Diagnostic)]
pub enum AxleError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed declaration file (e.g. Axle.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Axle.toml for syntax errors"))]
    Manifest { message: String },

    /// A provider's values could not be loaded.
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// An axis has neither a literal nor a provider-supplied value.
    #[error("Axis '{axis}' has no value in variant '{variant}': {reason}")]
    #[diagnostic(
        code(axle::missing_axis_value),
        help("Give the axis a literal value or point it at a provider that defines it")
    )]
    MissingAxisValue {
        axis: String,
        variant: String,
        reason: String,
    },

    /// The base-variant chain loops back on itself.
    #[error("Cyclic variant inheritance: {cycle}")]
    #[diagnostic(code(axle::cyclic_variant))]
    CyclicVariantInheritance { cycle: String },

    /// The same coordinate was declared under two incompatible scopes.
    #[error("Dependency '{coordinate}' declared with conflicting scopes '{first}' and '{second}'")]
    #[diagnostic(code(axle::conflicting_scope))]
    ConflictingDependencyScope {
        coordinate: String,
        first: String,
        second: String,
    },

    /// The same coordinate was declared twice in one scope with different versions.
    #[error(
        "Dependency '{coordinate}' declared in scope '{scope}' with versions '{first}' and '{second}'"
    )]
    #[diagnostic(code(axle::conflicting_version))]
    ConflictingDependencyVersion {
        coordinate: String,
        scope: String,
        first: String,
        second: String,
    },

    /// A dependency string is not `group:artifact:version`.
    #[error("Invalid dependency coordinate '{coordinate}'")]
    #[diagnostic(help("Dependencies are written as \"group:artifact:version\""))]
    InvalidCoordinate { coordinate: String },

    /// A variant was requested that the declaration does not define.
    #[error("Unknown variant '{name}'")]
    UnknownVariant { name: String },

    /// A variant names a base variant that does not exist.
    #[error("Variant '{variant}' inherits from undeclared variant '{base}'")]
    UnknownBaseVariant { variant: String, base: String },

    /// A plugin was applied before one of its prerequisites.
    #[error("Plugin '{plugin}' must be applied after '{prerequisite}'")]
    #[diagnostic(help("Reorder the [[plugins]] entries in Axle.toml"))]
    PluginOrderViolation { plugin: String, prerequisite: String },

    /// Desugaring is enabled but no desugaring library is declared.
    #[error(
        "Variant '{variant}' enables core library desugaring but declares no coreLibraryDesugaring dependency"
    )]
    #[diagnostic(help(
        "Add e.g. coreLibraryDesugaring = [\"com.android.tools:desugar_jdk_libs:2.0.4\"] to [dependencies]"
    ))]
    MissingDesugaringLibrary { variant: String },

    /// A variant's `signingConfig` names an undeclared signing config.
    #[error("Variant '{variant}' uses undeclared signing config '{name}'")]
    UnknownSigningConfig { variant: String, name: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type AxleResult<T> = miette::Result<T>;
