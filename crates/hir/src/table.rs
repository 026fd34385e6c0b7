use crate::error::{BuildError, Result};
use crate::line_index::LineIndex;
use crate::structure::{is_builtin_scalar, Extractor, FieldSignature, TypeDef, TypeDefKind, TypeRef};
use apollo_compiler::ast;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Root operation type names of a schema
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootTypeNames {
    pub query: Option<Arc<str>>,
    pub mutation: Option<Arc<str>>,
    pub subscription: Option<Arc<str>>,
}

impl RootTypeNames {
    /// Check if a type name is one of the root operation types
    #[must_use]
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.query.as_deref() == Some(type_name)
            || self.mutation.as_deref() == Some(type_name)
            || self.subscription.as_deref() == Some(type_name)
    }

    fn set(&mut self, operation: ast::OperationType, type_name: &str) {
        let slot = match operation {
            ast::OperationType::Query => &mut self.query,
            ast::OperationType::Mutation => &mut self.mutation,
            ast::OperationType::Subscription => &mut self.subscription,
        };
        *slot = Some(Arc::from(type_name));
    }
}

/// Parse SDL text with apollo-compiler
///
/// Any syntax error is fatal; rules assume a well-formed document.
#[tracing::instrument(skip(source), fields(size = source.len()))]
pub fn parse_schema(source: &str, path: &str) -> Result<ast::Document> {
    apollo_compiler::parser::Parser::new()
        .parse_ast(source, path)
        .map_err(|with_errors| {
            tracing::debug!("Schema has parse errors");
            BuildError::Parse(with_errors.errors.to_string())
        })
}

/// Read-only registry of every named type in one schema document
///
/// Every type reference inside the table resolves either to a type in the
/// table or to a built-in scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    types: BTreeMap<Arc<str>, TypeDef>,
    roots: RootTypeNames,
}

impl SymbolTable {
    /// Parse and build in one step
    pub fn from_source(source: &str, path: &str) -> Result<Self> {
        if !has_definitions(source) {
            return Ok(Self::default());
        }
        let document = parse_schema(source, path)?;
        Self::build(&document, source)
    }

    /// Build the table from a parsed document
    ///
    /// Structural checks run in phases: duplicate type names, extension
    /// merging, duplicate field names, then reference resolution. The first
    /// failure in source order within the earliest failing phase is returned.
    #[tracing::instrument(skip_all, fields(definitions = document.definitions.len()))]
    pub fn build(document: &ast::Document, source: &str) -> Result<Self> {
        let line_index = LineIndex::new(source);
        let extractor = Extractor::new(&line_index);

        let mut types: BTreeMap<Arc<str>, TypeDef> = BTreeMap::new();
        let mut source_order: Vec<Arc<str>> = Vec::new();
        let mut extensions = Vec::new();
        let mut explicit_roots: Option<RootTypeNames> = None;
        let mut root_extensions = Vec::new();

        for definition in &document.definitions {
            match definition {
                ast::Definition::SchemaDefinition(schema_def) => {
                    let roots = explicit_roots.get_or_insert_with(RootTypeNames::default);
                    for root_op in &schema_def.root_operations {
                        let (operation, named_type) = &**root_op;
                        roots.set(*operation, named_type.as_str());
                    }
                }
                ast::Definition::SchemaExtension(schema_ext) => {
                    root_extensions.extend(schema_ext.root_operations.iter().map(|root_op| {
                        let (operation, named_type) = &**root_op;
                        (*operation, named_type.as_str())
                    }));
                }
                ast::Definition::OperationDefinition(_) | ast::Definition::FragmentDefinition(_) => {
                    tracing::warn!("Ignoring executable definition in schema document");
                }
                _ => {
                    let Some(extracted) = extractor.extract_definition(definition) else {
                        continue;
                    };
                    if extracted.is_extension {
                        extensions.push(extracted.def);
                        continue;
                    }

                    let name = extracted.def.name.clone();
                    if types.contains_key(&name) || is_builtin_scalar(&name) {
                        return Err(BuildError::DuplicateTypeName {
                            name: name.to_string(),
                        });
                    }
                    source_order.push(name.clone());
                    types.insert(name, extracted.def);
                }
            }
        }

        for extension in extensions {
            merge_extension(&mut types, extension)?;
        }

        for name in &source_order {
            if let Some(type_def) = types.get(name) {
                check_unique_fields(type_def)?;
            }
        }

        // `extend schema` only overrides the operations it names
        let mut roots = explicit_roots.unwrap_or_else(|| RootTypeNames {
            query: default_root(&types, "Query"),
            mutation: default_root(&types, "Mutation"),
            subscription: default_root(&types, "Subscription"),
        });
        for (operation, type_name) in root_extensions {
            roots.set(operation, type_name);
        }

        let table = Self { types, roots };
        table.check_references(&source_order)?;

        tracing::debug!(types = table.types.len(), "Built symbol table");
        Ok(table)
    }

    /// Look up a type by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// All declared types, sorted by name
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub const fn roots(&self) -> &RootTypeNames {
        &self.roots
    }

    #[must_use]
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.roots.is_root_type(type_name)
    }

    #[must_use]
    pub fn query_type(&self) -> Option<&TypeDef> {
        self.roots.query.as_deref().and_then(|name| self.get(name))
    }

    #[must_use]
    pub fn mutation_type(&self) -> Option<&TypeDef> {
        self.roots.mutation.as_deref().and_then(|name| self.get(name))
    }

    #[must_use]
    pub fn is_query_type(&self, type_name: &str) -> bool {
        self.roots.query.as_deref() == Some(type_name)
    }

    #[must_use]
    pub fn is_mutation_type(&self, type_name: &str) -> bool {
        self.roots.mutation.as_deref() == Some(type_name)
    }

    /// Kind of the named type at the core of a reference
    ///
    /// Built-in scalars resolve to `Scalar`.
    #[must_use]
    pub fn kind_of(&self, type_ref: &TypeRef) -> Option<TypeDefKind> {
        if is_builtin_scalar(&type_ref.name) {
            return Some(TypeDefKind::Scalar);
        }
        self.get(&type_ref.name).map(|t| t.kind)
    }

    /// Whether a reference names a leaf type (scalar or enum)
    #[must_use]
    pub fn is_scalar_or_enum(&self, type_ref: &TypeRef) -> bool {
        matches!(
            self.kind_of(type_ref),
            Some(TypeDefKind::Scalar | TypeDefKind::Enum)
        )
    }

    /// Resolve the type a field returns
    #[must_use]
    pub fn output_type(&self, field: &FieldSignature) -> Option<&TypeDef> {
        self.get(&field.type_ref.name)
    }

    fn resolves(&self, name: &str) -> bool {
        is_builtin_scalar(name) || self.types.contains_key(name)
    }

    fn check_references(&self, source_order: &[Arc<str>]) -> Result<()> {
        for name in source_order {
            let Some(type_def) = self.types.get(name) else {
                continue;
            };

            for interface in &type_def.implements {
                self.require(interface, || format!("'{name}' implements clause"))?;
            }
            for member in &type_def.union_members {
                self.require(member, || format!("union '{name}'"))?;
            }
            for field in &type_def.fields {
                self.require(&field.type_ref.name, || {
                    format!("field '{name}.{}'", field.name)
                })?;
                for arg in &field.arguments {
                    self.require(&arg.type_ref.name, || {
                        format!("argument '{name}.{}({})'", field.name, arg.name)
                    })?;
                }
            }
        }

        for (operation, root) in [
            ("query", &self.roots.query),
            ("mutation", &self.roots.mutation),
            ("subscription", &self.roots.subscription),
        ] {
            if let Some(root) = root {
                self.require(root, || format!("schema {operation} root"))?;
            }
        }

        Ok(())
    }

    fn require(&self, type_name: &str, referenced_from: impl FnOnce() -> String) -> Result<()> {
        if self.resolves(type_name) {
            Ok(())
        } else {
            Err(BuildError::UnresolvedTypeReference {
                type_name: type_name.to_string(),
                referenced_from: referenced_from(),
            })
        }
    }
}

/// Whether the source holds anything besides whitespace, commas and comments
fn has_definitions(source: &str) -> bool {
    source.lines().any(|line| {
        let line = line.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '\u{feff}');
        !line.is_empty() && !line.starts_with('#')
    })
}

fn default_root(types: &BTreeMap<Arc<str>, TypeDef>, name: &str) -> Option<Arc<str>> {
    types.contains_key(name).then(|| Arc::from(name))
}

fn merge_extension(types: &mut BTreeMap<Arc<str>, TypeDef>, extension: TypeDef) -> Result<()> {
    let Some(base) = types.get_mut(&extension.name) else {
        return Err(BuildError::UnresolvedTypeReference {
            type_name: extension.name.to_string(),
            referenced_from: format!("extension of '{}'", extension.name),
        });
    };

    if base.kind != extension.kind {
        return Err(BuildError::ExtensionKindMismatch {
            name: extension.name.to_string(),
            expected: base.kind.keyword().to_string(),
        });
    }

    tracing::trace!(type_name = %extension.name, "Merging type extension");
    base.fields.extend(extension.fields);
    base.implements.extend(extension.implements);
    base.union_members.extend(extension.union_members);
    base.enum_values.extend(extension.enum_values);
    Ok(())
}

fn check_unique_fields(type_def: &TypeDef) -> Result<()> {
    let mut seen = HashSet::new();
    for field in &type_def.fields {
        if !seen.insert(field.name.as_ref()) {
            return Err(BuildError::DuplicateFieldName {
                type_name: type_def.name.to_string(),
                field_name: field.name.to_string(),
            });
        }
    }
    Ok(())
}
