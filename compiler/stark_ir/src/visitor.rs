//! Syntax tree visitor.
//!
//! Override `visit_*` methods to observe specific nodes; the default
//! implementations call the matching `walk_*` function, which visits the
//! children. The tree itself is never mutated.
//!
//! # Example
//!
//! ```text
//! struct CollectImports(Vec<String>);
//!
//! impl<'ast> SyntaxVisitor<'ast> for CollectImports {
//!     fn visit_import_name(&mut self, name: &'ast ImportNameOrAlias) {
//!         self.0.push(name.local_name().to_owned());
//!     }
//! }
//! ```

use crate::ast::{
    Directive, Directives, ExternPackageDirective, ImportDirective, ImportNameOrAlias,
    ImportPath, ImportTarget, ModuleDirective, ModuleFullName, ModulePath,
};

pub trait SyntaxVisitor<'ast> {
    fn visit_directives(&mut self, directives: &'ast Directives) {
        walk_directives(self, directives);
    }

    fn visit_directive(&mut self, directive: &'ast Directive) {
        walk_directive(self, directive);
    }

    fn visit_module(&mut self, module: &'ast ModuleDirective) {
        let _ = module;
    }

    fn visit_import(&mut self, import: &'ast ImportDirective) {
        walk_import_path(self, &import.import_path);
    }

    fn visit_extern_package(&mut self, extern_package: &'ast ExternPackageDirective) {
        walk_module_full_name(self, &extern_package.package_name);
    }

    fn visit_module_path(&mut self, path: &'ast ModulePath) {
        let _ = path;
    }

    fn visit_import_name(&mut self, name: &'ast ImportNameOrAlias) {
        let _ = name;
    }
}

pub fn walk_directives<'ast, V: SyntaxVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    directives: &'ast Directives,
) {
    for directive in directives {
        visitor.visit_directive(directive);
    }
}

pub fn walk_directive<'ast, V: SyntaxVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    directive: &'ast Directive,
) {
    match directive {
        Directive::Module(module) => visitor.visit_module(module),
        Directive::Import(import) => visitor.visit_import(import),
        Directive::ExternPackage(extern_package) => visitor.visit_extern_package(extern_package),
    }
}

pub fn walk_import_path<'ast, V: SyntaxVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    import_path: &'ast ImportPath,
) {
    visitor.visit_module_path(&import_path.path);
    match &import_path.target {
        ImportTarget::Single(name) => visitor.visit_import_name(name),
        ImportTarget::All(_) => {}
        ImportTarget::List(names) => {
            for name in names {
                visitor.visit_import_name(name);
            }
        }
    }
}

pub fn walk_module_full_name<'ast, V: SyntaxVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    full_name: &'ast ModuleFullName,
) {
    visitor.visit_module_path(&full_name.path);
}

impl Directives {
    /// Run `visitor` over every directive in order.
    pub fn visit<'ast>(&'ast self, visitor: &mut dyn SyntaxVisitor<'ast>) {
        visitor.visit_directives(self);
    }
}

impl Directive {
    pub fn visit<'ast>(&'ast self, visitor: &mut dyn SyntaxVisitor<'ast>) {
        visitor.visit_directive(self);
    }
}
