use crate::model::{JavaAnnotation, JavaElementValue, JavaFileModel, JavaTypeEntity};
use crate::resolver::JavaTypeResolver;
use crate::resolver::context::{KnownTypes, ResolutionContext};
use routegen_api::{
    InMemoryCatalog, Marker, MarkerArg, MarkerValue, SourceLocation, TypeCatalog,
    TypeDeclaration, TypeId,
};

/// Type catalog assembled from parsed Java files.
///
/// Declarations appear in file order, then in pre-order within each file,
/// so callers control walk order through the order of the models they pass.
#[derive(Debug, Clone, Default)]
pub struct JavaTypeCatalog {
    inner: InMemoryCatalog,
    known: KnownTypes,
}

fn qualified(package: Option<&str>, entity: &JavaTypeEntity) -> String {
    package
        .filter(|p| !p.is_empty())
        .into_iter()
        .chain(entity.enclosing.iter().map(String::as_str))
        .chain(std::iter::once(entity.name.as_str()))
        .collect::<Vec<_>>()
        .join(".")
}

impl JavaTypeCatalog {
    pub fn from_models(models: &[JavaFileModel]) -> Self {
        let mut known = KnownTypes::new();
        for model in models {
            for entity in &model.types {
                known.insert(&entity.name, qualified(model.package.as_deref(), entity));
            }
        }

        let resolver = JavaTypeResolver::new();
        let mut inner = InMemoryCatalog::new();
        for model in models {
            let package = model.package.as_deref();
            for entity in &model.types {
                let context = ResolutionContext::new(package, &model.imports, &known)
                    .with_enclosing_types(enclosing_chain(package, entity));
                let markers = entity
                    .annotations
                    .iter()
                    .map(|a| to_marker(a, model, &resolver, &context))
                    .collect();

                let mut decl =
                    TypeDeclaration::new(&entity.name, package.unwrap_or_default(), entity.kind)
                        .with_enclosing(entity.enclosing.clone())
                        .with_abstract(entity.is_abstract)
                        .with_origin(SourceLocation::new(model.path.clone(), entity.line));
                decl.markers = markers;
                inner.push(decl);
            }
        }

        tracing::debug!(
            "Built Java type catalog: {} declarations from {} files",
            inner.len(),
            models.len()
        );
        Self { inner, known }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_known(&self, qualified_name: &str) -> bool {
        self.known.contains(qualified_name)
    }
}

impl TypeCatalog for JavaTypeCatalog {
    fn declarations(&self) -> &[TypeDeclaration] {
        self.inner.declarations()
    }

    fn get(&self, id: TypeId) -> Option<&TypeDeclaration> {
        self.inner.get(id)
    }
}

/// The entity itself and each outer type, innermost first.
fn enclosing_chain(package: Option<&str>, entity: &JavaTypeEntity) -> Vec<String> {
    let mut chain = Vec::with_capacity(entity.enclosing.len() + 1);
    let mut path: Vec<&str> = package.filter(|p| !p.is_empty()).into_iter().collect();
    for outer in &entity.enclosing {
        path.push(outer);
        chain.push(path.join("."));
    }
    path.push(&entity.name);
    chain.push(path.join("."));
    chain.reverse();
    chain
}

fn to_marker(
    annotation: &JavaAnnotation,
    model: &JavaFileModel,
    resolver: &JavaTypeResolver,
    context: &ResolutionContext,
) -> Marker {
    let args = annotation
        .args
        .iter()
        .map(|arg| MarkerArg {
            key: arg.key.clone(),
            value: match &arg.value {
                JavaElementValue::Str(s) => MarkerValue::Str(s.clone()),
                JavaElementValue::ClassLiteral(written) => {
                    MarkerValue::TypeRef(resolver.resolve(written, context))
                }
                JavaElementValue::Null => MarkerValue::Null,
                JavaElementValue::Other(text) => MarkerValue::Other(text.clone()),
            },
        })
        .collect();
    Marker {
        name: annotation.name.clone(),
        args,
        origin: Some(SourceLocation::new(model.path.clone(), annotation.line)),
    }
}
