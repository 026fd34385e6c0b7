use crate::line_index::LineIndex;
use apollo_compiler::ast;
use apollo_compiler::Node;
use std::sync::Arc;

/// Scalars every schema gets without declaring them
pub const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Returns true if `name` is one of the built-in scalars
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// A named type declared in the schema
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDef {
    pub name: Arc<str>,
    pub kind: TypeDefKind,
    pub fields: Vec<FieldSignature>,
    pub implements: Vec<Arc<str>>,
    pub union_members: Vec<Arc<str>>,
    pub enum_values: Vec<EnumValue>,
    /// 1-based position of the type name
    pub position: SourcePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum TypeDefKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

impl TypeDefKind {
    /// Keyword used to declare this kind in SDL
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::InputObject => "input",
        }
    }

    /// Whether this kind has fields
    #[must_use]
    pub const fn has_fields(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::InputObject)
    }
}

impl std::fmt::Display for TypeDefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Interface => write!(f, "interface"),
            Self::Union => write!(f, "union"),
            Self::Enum => write!(f, "enum"),
            Self::Scalar => write!(f, "scalar"),
            Self::InputObject => write!(f, "input object"),
        }
    }
}

/// Signature of a field on an object, interface or input object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSignature {
    pub name: Arc<str>,
    /// Name of the type declaring this field
    pub parent_type: Arc<str>,
    pub type_ref: TypeRef,
    pub arguments: Vec<ArgumentDef>,
    pub position: SourcePosition,
}

impl FieldSignature {
    /// Find an argument by name
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ArgumentDef> {
        self.arguments.iter().find(|arg| arg.name.as_ref() == name)
    }
}

/// Reference to a type (with list/non-null wrappers)
///
/// `is_non_null` applies to the outermost wrapper. For lists, `inner_non_null`
/// applies to the innermost element and `list_depth` counts the nesting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: Arc<str>,
    pub is_list: bool,
    pub is_non_null: bool,
    pub inner_non_null: bool,
    pub list_depth: u8,
}

impl TypeRef {
    /// A bare named reference, e.g. `User`
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>, is_non_null: bool) -> Self {
        Self {
            name: name.into(),
            is_list: false,
            is_non_null,
            inner_non_null: false,
            list_depth: 0,
        }
    }

    /// Returns true for `name!`
    #[must_use]
    pub fn is_non_null_named(&self, name: &str) -> bool {
        !self.is_list && self.is_non_null && self.name.as_ref() == name
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_list {
            write!(f, "{}", self.name)?;
            if self.is_non_null {
                write!(f, "!")?;
            }
            return Ok(());
        }

        for _ in 0..self.list_depth {
            write!(f, "[")?;
        }
        write!(f, "{}", self.name)?;
        if self.inner_non_null {
            write!(f, "!")?;
        }
        for _ in 0..self.list_depth {
            write!(f, "]")?;
        }
        if self.is_non_null {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// An argument of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentDef {
    pub name: Arc<str>,
    /// Name of the field declaring this argument
    pub parent_field: Arc<str>,
    pub type_ref: TypeRef,
    pub position: SourcePosition,
}

/// A value of an enum type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub name: Arc<str>,
    pub position: SourcePosition,
}

/// 1-based line/column of a name in the schema source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

/// A type definition as it appears in the document, before extensions are merged
#[derive(Debug, Clone)]
pub(crate) struct ExtractedType {
    pub def: TypeDef,
    pub is_extension: bool,
}

/// Extracts names and positions from apollo-compiler AST nodes
pub(crate) struct Extractor<'a> {
    line_index: &'a LineIndex<'a>,
}

impl<'a> Extractor<'a> {
    pub(crate) const fn new(line_index: &'a LineIndex<'a>) -> Self {
        Self { line_index }
    }

    /// Extract a type definition or extension. Returns `None` for definitions
    /// that don't declare a named type (schema, directives, operations).
    pub(crate) fn extract_definition(&self, definition: &ast::Definition) -> Option<ExtractedType> {
        let (def, is_extension) = match definition {
            ast::Definition::ObjectTypeDefinition(obj) => (
                self.object_like(
                    &obj.name,
                    TypeDefKind::Object,
                    &obj.fields,
                    &obj.implements_interfaces,
                ),
                false,
            ),
            ast::Definition::ObjectTypeExtension(ext) => (
                self.object_like(
                    &ext.name,
                    TypeDefKind::Object,
                    &ext.fields,
                    &ext.implements_interfaces,
                ),
                true,
            ),
            ast::Definition::InterfaceTypeDefinition(iface) => (
                self.object_like(
                    &iface.name,
                    TypeDefKind::Interface,
                    &iface.fields,
                    &iface.implements_interfaces,
                ),
                false,
            ),
            ast::Definition::InterfaceTypeExtension(ext) => (
                self.object_like(
                    &ext.name,
                    TypeDefKind::Interface,
                    &ext.fields,
                    &ext.implements_interfaces,
                ),
                true,
            ),
            ast::Definition::InputObjectTypeDefinition(input) => {
                (self.input_object(&input.name, &input.fields), false)
            }
            ast::Definition::InputObjectTypeExtension(ext) => {
                (self.input_object(&ext.name, &ext.fields), true)
            }
            ast::Definition::UnionTypeDefinition(union_def) => {
                (self.union_type(&union_def.name, &union_def.members), false)
            }
            ast::Definition::UnionTypeExtension(ext) => {
                (self.union_type(&ext.name, &ext.members), true)
            }
            ast::Definition::EnumTypeDefinition(enum_def) => {
                (self.enum_type(&enum_def.name, &enum_def.values), false)
            }
            ast::Definition::EnumTypeExtension(ext) => (self.enum_type(&ext.name, &ext.values), true),
            ast::Definition::ScalarTypeDefinition(scalar) => {
                (self.bare(&scalar.name, TypeDefKind::Scalar), false)
            }
            ast::Definition::ScalarTypeExtension(ext) => {
                (self.bare(&ext.name, TypeDefKind::Scalar), true)
            }
            _ => return None,
        };

        Some(ExtractedType { def, is_extension })
    }

    fn object_like(
        &self,
        name: &apollo_compiler::Name,
        kind: TypeDefKind,
        fields: &[Node<ast::FieldDefinition>],
        implements: &[apollo_compiler::Name],
    ) -> TypeDef {
        let type_name: Arc<str> = Arc::from(name.as_str());
        let fields = fields
            .iter()
            .map(|f| self.field_signature(f, &type_name))
            .collect();

        TypeDef {
            fields,
            implements: implements.iter().map(|t| Arc::from(t.as_str())).collect(),
            ..self.bare(name, kind)
        }
    }

    fn input_object(&self, name: &apollo_compiler::Name, fields: &[Node<ast::InputValueDefinition>]) -> TypeDef {
        let type_name: Arc<str> = Arc::from(name.as_str());
        let fields = fields
            .iter()
            .map(|f| FieldSignature {
                name: Arc::from(f.name.as_str()),
                parent_type: type_name.clone(),
                type_ref: extract_type_ref(&f.ty),
                arguments: Vec::new(),
                position: self.position(&f.name),
            })
            .collect();

        TypeDef {
            fields,
            ..self.bare(name, TypeDefKind::InputObject)
        }
    }

    fn union_type(&self, name: &apollo_compiler::Name, members: &[ast::NamedType]) -> TypeDef {
        TypeDef {
            union_members: members.iter().map(|t| Arc::from(t.as_str())).collect(),
            ..self.bare(name, TypeDefKind::Union)
        }
    }

    fn enum_type(&self, name: &apollo_compiler::Name, values: &[Node<ast::EnumValueDefinition>]) -> TypeDef {
        let enum_values = values
            .iter()
            .map(|v| EnumValue {
                name: Arc::from(v.value.as_str()),
                position: self.position(&v.value),
            })
            .collect();

        TypeDef {
            enum_values,
            ..self.bare(name, TypeDefKind::Enum)
        }
    }

    fn bare(&self, name: &apollo_compiler::Name, kind: TypeDefKind) -> TypeDef {
        TypeDef {
            name: Arc::from(name.as_str()),
            kind,
            fields: Vec::new(),
            implements: Vec::new(),
            union_members: Vec::new(),
            enum_values: Vec::new(),
            position: self.position(name),
        }
    }

    fn field_signature(&self, field: &ast::FieldDefinition, parent_type: &Arc<str>) -> FieldSignature {
        let name: Arc<str> = Arc::from(field.name.as_str());
        let arguments = field
            .arguments
            .iter()
            .map(|arg| ArgumentDef {
                name: Arc::from(arg.name.as_str()),
                parent_field: name.clone(),
                type_ref: extract_type_ref(&arg.ty),
                position: self.position(&arg.name),
            })
            .collect();

        FieldSignature {
            name,
            parent_type: parent_type.clone(),
            type_ref: extract_type_ref(&field.ty),
            arguments,
            position: self.position(&field.name),
        }
    }

    pub(crate) fn position(&self, name: &apollo_compiler::Name) -> SourcePosition {
        name.location()
            .map(|loc| {
                let (line, column) = self.line_index.line_col(loc.offset());
                SourcePosition {
                    line: line + 1,
                    column: column + 1,
                }
            })
            .unwrap_or_default()
    }
}

pub(crate) fn extract_type_ref(ty: &ast::Type) -> TypeRef {
    let name: Arc<str> = Arc::from(ty.inner_named_type().as_str());
    let is_non_null = ty.is_non_null();

    let mut list_depth: u8 = 0;
    let mut current = ty;
    loop {
        match current {
            ast::Type::List(inner) | ast::Type::NonNullList(inner) => {
                list_depth = list_depth.saturating_add(1);
                current = inner.as_ref();
            }
            ast::Type::Named(_) | ast::Type::NonNullNamed(_) => break,
        }
    }

    let is_list = list_depth > 0;
    TypeRef {
        name,
        is_list,
        is_non_null,
        inner_non_null: is_list && matches!(current, ast::Type::NonNullNamed(_)),
        list_depth,
    }
}
