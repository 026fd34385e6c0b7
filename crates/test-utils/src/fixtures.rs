//! Schemas reused across test suites

/// A schema that follows every default convention
///
/// Linting it with the default configuration yields no diagnostics.
pub const CONVENTIONAL_SCHEMA: &str = r"
schema {
  query: Query
  mutation: Mutation
}

type Query {
  user(id: ID!): User
  users(filter: UserFilter): [User!]!
  countries: [Country!]!
}

type Mutation {
  createUser(draft: UserDraft!): CreateUserResult!
  updateUser(id: ID!, input: UserInput!): UpdateUserResult!
  deleteUser(id: ID!): DeleteUserResult!
}

type User {
  id: ID!
  name: String!
  email: String
  dateOfBirth: String
  role: Role!
  country: Country
  friends: [User!]!
}

type Country {
  id: ID!
  code: String!
  name: String!
}

enum Role {
  ADMIN
  EDITOR
  VIEWER
}

input UserDraft {
  name: String!
  email: String
  role: Role!
}

input UserInput {
  name: String
  email: String
}

input UserFilter {
  role: Role
  countryCode: String
}

type CreateUserResult {
  success: Boolean!
  errors: [UserError!]!
  user: User
}

type UpdateUserResult {
  success: Boolean!
  errors: [UserError!]!
  user: User
}

type DeleteUserResult {
  success: Boolean!
  errors: [UserError!]!
  deletedId: ID
}

type UserError {
  message: String!
  field: String
}
";

/// Country lookup with a filter input, the shape of a typical read-only API
pub const COUNTRIES_SCHEMA: &str = r"
type Query {
  countries(filter: CountryFilter): [Country!]!
  country(id: ID!): Country
}

input CountryFilter {
  continent: Continent
}

type Country {
  id: ID!
  name: String!
  continent: Continent!
}

enum Continent {
  AFRICA
  ASIA
  EUROPE
}
";

/// A small schema breaking several conventions at once
pub const VIOLATIONS_SCHEMA: &str = r"
type Query {
  user(id: ID!): User!
  users: [User]
}

type Mutation {
  newUser(user: UserInput!): NewUserResult!
}

type User {
  id: ID!
  first_name: String
}

input UserInput {
  name: String
}

type NewUserResult {
  success: Boolean!
}

enum StatusEnum {
  active
}
";
