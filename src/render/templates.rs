pub const TEXT_TEMPLATE: &str = r#"{% if empty %}
{{ placeholder }}
{% else %}
{% for item in items %}
{{ item.indicator }} {{ item.question }}
{% if item.expanded %}
    {{ item.answer }}
{% endif %}
{% endfor %}
{% endif %}
"#;

pub const MARKDOWN_TEMPLATE: &str = r#"{% if empty %}
_{{ placeholder }}_
{% else %}
{% for item in items %}
- {{ item.indicator }} **{{ item.question }}**
{% if item.expanded %}

  {{ item.answer }}

{% endif %}
{% endfor %}
{% endif %}
"#;
