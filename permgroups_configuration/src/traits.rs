pub(crate) trait TryResolve {
    type Resolved;
    type Error;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error>;
}


pub(crate) trait TryResolveWithContext {
    type Resolved;
    type Context;
    type Error;

    fn try_resolve_with_context(self, context: Self::Context)
        -> Result<Self::Resolved, Self::Error>;
}
