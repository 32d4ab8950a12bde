pub struct ItemIdVisitor;
