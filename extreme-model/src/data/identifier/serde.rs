use super::Identifier;

impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdentifierVisitor)
    }
}

struct IdentifierVisitor;

impl<'de> serde::de::Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a resource identifier like 'namespace:path'")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::try_from(v).map_err(|err| serde::de::Error::custom(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize, Debug, dm::Constructor, Clone, PartialEq, Eq)]
    struct Test {
        id: Identifier,
    }

    #[test]
    fn json_serialize() {
        let id = Identifier::try_from("mod:textures/glow").unwrap();

        let string = serde_json::to_string(&Test::new(id)).unwrap();
        assert_eq!(r#"{"id":"mod:textures/glow"}"#, string);
    }

    #[test]
    fn json_deserialize() {
        let json = r#"{"id": "silly/little/path"}"#;

        let test = serde_json::from_str::<Test>(json).unwrap();
        assert_eq!(Identifier::try_from("minecraft:silly/little/path").unwrap(), test.id);

        assert!(serde_json::from_str::<Test>(r#"{"id": "Not Valid"}"#).is_err());
    }
}
